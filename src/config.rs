//! Site configuration.
//!
//! Every key is optional; a missing file yields [`SiteConfig::default`].

use crate::error::{SsgError, SsgResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::path::Path;

/// JST, the offset timestamps were always stamped in.
const DEFAULT_UTC_OFFSET_SECS: i32 = 32400;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Target of the "View All" link in every list header.
    pub view_all_href: String,
    /// Prefix joined with an article id to form its link.
    pub article_base: String,
    /// Prefix injected into every `href` of rendered article bodies.
    /// Empty disables rewriting.
    pub link_proxy: String,
    pub utc_offset_secs: i32,
    pub date_format: String,
    /// How many articles the "Latest" list shows.
    pub latest_count: usize,
    /// Article ids for the "Popular" list, in display order.
    pub popular: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            view_all_href: "/articles/".to_string(),
            article_base: "/".to_string(),
            link_proxy: "https://href.li/?".to_string(),
            utc_offset_secs: DEFAULT_UTC_OFFSET_SECS,
            date_format: "%Y/%m/%d %H:%M".to_string(),
            latest_count: 5,
            popular: vec![],
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> SsgResult<SiteConfig> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::parse(&raw).map_err(|source| SsgError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<SiteConfig, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Rejects a `date_format` chrono cannot render.
    pub fn validate(&self) -> SsgResult<()> {
        check_date_format(&self.date_format)
    }

    /// Falls back to UTC when the configured offset is out of range.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| {
            tracing::warn!(
                utc_offset_secs = self.utc_offset_secs,
                "utc offset out of range, using UTC"
            );
            Utc.fix()
        })
    }
}

pub fn check_date_format(date_format: &str) -> SsgResult<()> {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(SsgError::DateFormat(date_format.to_string()));
    }
    Ok(())
}
