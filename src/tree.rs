use crate::article::Article;
use std::cmp::{Ord, Ordering, PartialOrd};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PageNode {
    IndexPage(PathBuf, Vec<PageNode>),
    Article(PathBuf, Article),
}

impl PageNode {
    /// Every article below this node, depth-first in sibling order.
    pub fn articles(&self) -> Vec<&Article> {
        let mut out = vec![];
        self.collect_articles(&mut out);
        out
    }

    fn collect_articles<'a>(&'a self, out: &mut Vec<&'a Article>) {
        match self {
            PageNode::Article(_, article) => out.push(article),
            PageNode::IndexPage(_, children) => {
                for child in children {
                    child.collect_articles(out);
                }
            }
        }
    }
}

impl Ord for PageNode {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PageNode::IndexPage(path1, _), PageNode::IndexPage(path2, _)) => path1.cmp(path2),
            // an article must be less than index page
            (PageNode::IndexPage(..), PageNode::Article(..)) => Ordering::Greater,
            (PageNode::Article(..), PageNode::IndexPage(..)) => Ordering::Less,
            (PageNode::Article(path1, article1), PageNode::Article(path2, article2)) => article1
                .created_at
                .cmp(&article2.created_at)
                .then_with(|| path1.cmp(path2)),
        }
    }
}

impl PartialOrd for PageNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn article(path: &str, created_at: &str) -> PageNode {
        let created_at = DateTime::parse_from_rfc3339(created_at).unwrap();
        PageNode::Article(
            PathBuf::from(path),
            Article {
                url: path.to_string(),
                title: path.to_string(),
                body: String::new(),
                created_at,
                modified_at: created_at,
                tags: vec![],
            },
        )
    }

    fn url(node: &PageNode) -> &str {
        match node {
            PageNode::Article(_, a) => &a.url,
            PageNode::IndexPage(p, _) => p.to_str().unwrap(),
        }
    }

    #[test]
    fn articles_sort_before_indexes_and_by_creation() {
        let mut nodes = vec![
            PageNode::IndexPage(PathBuf::from("b"), vec![]),
            article("z", "2023-01-02T00:00:00+09:00"),
            PageNode::IndexPage(PathBuf::from("a"), vec![]),
            article("y", "2023-01-01T00:00:00+09:00"),
            article("x", "2023-01-02T00:00:00+09:00"),
        ];
        nodes.sort();
        let order: Vec<&str> = nodes.iter().map(url).collect();
        assert_eq!(order, vec!["y", "x", "z", "a", "b"]);
    }

    #[test]
    fn articles_walks_nested_indexes() {
        let tree = PageNode::IndexPage(
            PathBuf::new(),
            vec![
                article("top", "2023-01-01T00:00:00+09:00"),
                PageNode::IndexPage(
                    PathBuf::from("posts"),
                    vec![article("posts/inner", "2023-01-03T00:00:00+09:00")],
                ),
            ],
        );
        let urls: Vec<&str> = tree.articles().iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["top", "posts/inner"]);
    }
}
