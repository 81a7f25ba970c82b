use crate::error::{SsgError, SsgResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A rendered markdown document, written out as `<path>.json`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<FixedOffset>,
    pub modified_at: DateTime<FixedOffset>,
    pub tags: Vec<String>,
}

/// What an article list row needs to know about a post.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl Article {
    pub fn summary(&self, date_format: &str) -> SsgResult<ArticleSummary> {
        let mut date = String::new();
        write!(date, "{}", self.created_at.format(date_format))
            .map_err(|_| SsgError::DateFormat(date_format.to_string()))?;
        Ok(ArticleSummary {
            id: self.url.clone(),
            title: self.title.clone(),
            date,
            tags: self.tags.clone(),
        })
    }
}
