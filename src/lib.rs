pub mod article;
pub mod article_list;
pub mod config;
pub mod error;
pub mod logging;
pub mod site;
pub mod ssg;
pub mod tree;

pub use article::{Article, ArticleSummary};
pub use article_list::{render, render_random, ArticleListView, ListLinks, ListMode};
pub use config::SiteConfig;
pub use error::{SsgError, SsgResult};
pub use ssg::Ssg;
pub use tree::PageNode;
