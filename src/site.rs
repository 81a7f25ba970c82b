//! Site-wide `index.html` with the Latest and Popular article lists.

use crate::article::ArticleSummary;
use crate::article_list::{render_random, ListLinks, ListMode};
use crate::config::SiteConfig;
use crate::error::SsgResult;
use crate::tree::PageNode;
use std::path::Path;

pub const DEFAULT_INDEX_TEMPLATE: &str = include_str!("../assets/template_index.html");

/// Summaries of every article under `root`, newest first.
pub fn summaries(root: &PageNode, config: &SiteConfig) -> SsgResult<Vec<ArticleSummary>> {
    let mut articles = root.articles();
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.url.cmp(&b.url))
    });
    articles
        .into_iter()
        .map(|article| article.summary(&config.date_format))
        .collect()
}

pub fn latest(summaries: &[ArticleSummary], count: usize) -> &[ArticleSummary] {
    &summaries[..count.min(summaries.len())]
}

/// Picks `ids` out of `summaries`, keeping the order of `ids`.
pub fn popular(summaries: &[ArticleSummary], ids: &[String]) -> Vec<ArticleSummary> {
    ids.iter()
        .filter_map(|id| {
            let found = summaries.iter().find(|s| &s.id == id);
            if found.is_none() {
                tracing::warn!(id = %id, "popular article not found");
            }
            found.cloned()
        })
        .collect()
}

/// Fills `{{ latest }}` and `{{ popular }}` in `template`.
///
/// The Popular list is only rendered when the config names popular articles.
pub fn render_index(root: &PageNode, config: &SiteConfig, template: &str) -> SsgResult<String> {
    let links = ListLinks {
        view_all: config.view_all_href.clone(),
        article_base: config.article_base.clone(),
    };
    let all = summaries(root, config)?;

    let latest_html =
        render_random(ListMode::Latest, latest(&all, config.latest_count), &links).to_html()?;
    let popular_html = if config.popular.is_empty() {
        String::new()
    } else {
        render_random(ListMode::Popular, &popular(&all, &config.popular), &links).to_html()?
    };

    Ok(template
        .replace("{{ latest }}", &latest_html)
        .replace("{{ popular }}", &popular_html))
}

pub fn build_index(
    root: &PageNode,
    config: &SiteConfig,
    template: &str,
    dest: &Path,
) -> SsgResult<()> {
    let html = render_index(root, config, template)?;
    let path = dest.join("index.html");
    std::fs::write(&path, html)?;
    tracing::info!(path = %path.display(), "wrote index");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::error::SsgError;
    use chrono::DateTime;
    use std::path::PathBuf;

    fn node(url: &str, created_at: &str, tags: &[&str]) -> PageNode {
        let created_at = DateTime::parse_from_rfc3339(created_at).unwrap();
        PageNode::Article(
            PathBuf::from(url),
            Article {
                url: url.to_string(),
                title: url.to_string(),
                body: String::new(),
                created_at,
                modified_at: created_at,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    fn tree() -> PageNode {
        PageNode::IndexPage(
            PathBuf::new(),
            vec![
                node("old", "2023-01-01T09:00:00+09:00", &[]),
                PageNode::IndexPage(
                    PathBuf::from("posts"),
                    vec![
                        node("posts/mid", "2023-02-01T09:00:00+09:00", &["rust"]),
                        node("posts/new", "2023-03-01T09:00:00+09:00", &["a", "b"]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn summaries_are_newest_first() {
        let ids: Vec<String> = summaries(&tree(), &SiteConfig::default())
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["posts/new", "posts/mid", "old"]);
    }

    #[test]
    fn summaries_use_date_format() {
        let config = SiteConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(summaries(&tree(), &config).unwrap()[0].date, "2023-03-01");
    }

    #[test]
    fn bad_date_format_fails_instead_of_panicking() {
        let config = SiteConfig {
            date_format: "%Y %Q".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            summaries(&tree(), &config),
            Err(SsgError::DateFormat(_))
        ));
        assert!(render_index(&tree(), &config, "{{ latest }}").is_err());
    }

    #[test]
    fn latest_caps_at_count() {
        let all = summaries(&tree(), &SiteConfig::default()).unwrap();
        assert_eq!(latest(&all, 2).len(), 2);
        assert_eq!(latest(&all, 10).len(), 3);
        assert!(latest(&all, 0).is_empty());
    }

    #[test]
    fn popular_keeps_configured_order_and_skips_unknown() {
        let all = summaries(&tree(), &SiteConfig::default()).unwrap();
        let ids = vec!["old".to_string(), "missing".to_string(), "posts/new".to_string()];
        let picked: Vec<String> = popular(&all, &ids).into_iter().map(|s| s.id).collect();
        assert_eq!(picked, vec!["old", "posts/new"]);
    }

    #[test]
    fn index_without_popular_config_omits_popular_list() {
        let html = render_index(&tree(), &SiteConfig::default(), "{{ latest }}|{{ popular }}").unwrap();
        assert!(html.contains("Latest Articles"));
        assert!(!html.contains("Popular Articles"));
        assert!(html.ends_with('|'));
    }

    #[test]
    fn index_with_popular_config_renders_both() {
        let config = SiteConfig {
            popular: vec!["posts/mid".to_string()],
            latest_count: 1,
            ..SiteConfig::default()
        };
        let html = render_index(&tree(), &config, "{{ latest }}{{ popular }}").unwrap();
        assert!(html.contains("Latest Articles"));
        assert!(html.contains("Popular Articles"));
        // one latest row with a badge, one popular row without
        assert_eq!(html.matches("<article ").count(), 2);
        assert_eq!(html.matches("New!").count(), 1);
    }
}
