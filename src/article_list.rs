//! The "Popular Articles" / "Latest Articles" list.
//!
//! [`render`] builds an [`ArticleListView`] from summaries; the view is plain
//! data so it can be inspected directly or written out with
//! [`ArticleListView::to_html`] through `templates/article_list.html`.

use crate::article::ArticleSummary;
use crate::error::SsgResult;
use askama::Template;
use rand::Rng;

/// Background colors a tag chip may be painted with.
pub const TAG_PALETTE: [&str; 6] = [
    "#fff3bf",
    "#d3f9d8",
    "rgba(0,0,0,.1)",
    "#fff0f6",
    "#f3f0ff",
    "#e3fafc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Popular,
    Latest,
}

impl From<bool> for ListMode {
    fn from(is_popular: bool) -> Self {
        if is_popular {
            ListMode::Popular
        } else {
            ListMode::Latest
        }
    }
}

impl ListMode {
    pub fn heading(self) -> &'static str {
        match self {
            ListMode::Popular => "Popular Articles",
            ListMode::Latest => "Latest Articles",
        }
    }

    pub fn shows_new_badge(self) -> bool {
        self == ListMode::Latest
    }
}

/// Link targets the list points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLinks {
    pub view_all: String,
    /// Joined with an article id to form the row link.
    pub article_base: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub background: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub id: String,
    pub href: String,
    pub new_badge: bool,
    pub date: String,
    pub title: String,
    pub tags: Vec<TagChip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "article_list.html")]
pub struct ArticleListView {
    pub mode: ListMode,
    pub heading: &'static str,
    pub view_all_href: String,
    pub rows: Vec<ArticleRow>,
}

/// Renders one row per article, in input order.
///
/// Each tag chip draws its color from [`TAG_PALETTE`] with `rng`; nothing
/// ties one chip's color to another's or to a previous render.
pub fn render<R: Rng>(
    mode: ListMode,
    articles: &[ArticleSummary],
    links: &ListLinks,
    rng: &mut R,
) -> ArticleListView {
    let rows = articles
        .iter()
        .map(|article| ArticleRow {
            id: article.id.clone(),
            href: format!("{}{}", links.article_base, article.id),
            new_badge: mode.shows_new_badge(),
            date: article.date.clone(),
            title: article.title.clone(),
            tags: article
                .tags
                .iter()
                .map(|tag| TagChip {
                    label: tag.clone(),
                    background: TAG_PALETTE[rng.random_range(0..TAG_PALETTE.len())],
                })
                .collect(),
        })
        .collect();

    ArticleListView {
        mode,
        heading: mode.heading(),
        view_all_href: links.view_all.clone(),
        rows,
    }
}

/// [`render`] with the thread-local RNG.
pub fn render_random(
    mode: ListMode,
    articles: &[ArticleSummary],
    links: &ListLinks,
) -> ArticleListView {
    render(mode, articles, links, &mut rand::rng())
}

impl ArticleListView {
    pub fn to_html(&self) -> SsgResult<String> {
        Ok(self.render()?)
    }
}
