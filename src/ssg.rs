use crate::article::Article;
use crate::config::SiteConfig;
use crate::error::{SsgError, SsgResult};
use crate::tree::PageNode;
use chrono::offset::{FixedOffset, Utc};
use chrono::DateTime;
use comrak::ComrakOptions;
use regex::Regex;
use serde_json::json;
use std::fs::{read_dir, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug)]
pub struct Ssg {
    src: PathBuf,
    dest: PathBuf,
    option: ComrakOptions,
    ssg_tags_regex: Regex,
    tag_element_regex: Regex,
    link_proxy: String,
    offset: FixedOffset,
}

impl Ssg {
    pub fn new(src: PathBuf, dest: PathBuf, config: &SiteConfig) -> SsgResult<Ssg> {
        let mut option = ComrakOptions::default();
        option.extension.strikethrough = true;
        option.extension.footnotes = true;
        option.extension.autolink = true;
        option.extension.table = true;
        option.extension.description_lists = true;
        option.extension.front_matter_delimiter = Some("---".to_string());
        option.render.unsafe_ = true;
        let ssg_tags_regex = Regex::new(r"ssg-tags:\s*((?:#.+(?:,\s*)?)+)")?;
        let tag_element_regex = Regex::new(r"#([^#,]+)(?:,\s*)?")?;

        Ok(Ssg {
            src,
            dest,
            option,
            ssg_tags_regex,
            tag_element_regex,
            link_proxy: config.link_proxy.clone(),
            offset: config.offset(),
        })
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Tags from the first `ssg-tags: #a, #b` line, in order.
    pub fn extract_tags(&self, markdown: &str) -> Vec<String> {
        let Some(caps) = self.ssg_tags_regex.captures(markdown) else {
            return vec![];
        };
        let Some(tags) = caps.get(1) else {
            return vec![];
        };
        self.tag_element_regex
            .captures_iter(tags.as_str())
            .filter_map(|x| x.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    fn render_body(&self, markdown: &str) -> String {
        let html = comrak::markdown_to_html(markdown, &self.option);
        if self.link_proxy.is_empty() {
            html
        } else {
            html.replace("href=\"", &format!("href=\"{}", self.link_proxy))
        }
    }

    fn stamp(&self, time: SystemTime) -> DateTime<FixedOffset> {
        let time: DateTime<Utc> = time.into();
        time.with_timezone(&self.offset)
    }

    fn process_markdown_file(
        &self,
        file: PathBuf,
        base_path: PathBuf,
        metadata: Metadata,
    ) -> SsgResult<PageNode> {
        let title = file
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(".md"))
            .ok_or_else(|| SsgError::InvalidPath(file.clone()))?;
        let relative_path = file.strip_prefix(&self.src)?;
        let relative_path = relative_path.strip_prefix(&base_path)?;
        let url = base_path.join(relative_path);
        let url = url
            .to_str()
            .and_then(|url| url.strip_suffix(".md"))
            .ok_or_else(|| SsgError::InvalidPath(file.clone()))?
            .to_string();
        let dest_path = self.dest.join(format!("{url}.json"));

        tracing::info!(
            src = %file.display(),
            url = %url,
            dest = %dest_path.display(),
            "processing"
        );

        let markdown = std::fs::read_to_string(&file)?;
        let tags = self.extract_tags(&markdown);
        let body = self.render_body(&markdown);

        let modified = metadata.modified()?;
        let created = metadata.created().unwrap_or_else(|err| {
            tracing::debug!(src = %file.display(), %err, "no creation time, using modified");
            modified
        });

        let article = Article {
            url: url.clone(),
            title: title.to_string(),
            body,
            created_at: self.stamp(created),
            modified_at: self.stamp(modified),
            tags,
        };

        std::fs::write(dest_path.as_path(), serde_json::to_string(&article)?)?;

        Ok(PageNode::Article(url.into(), article))
    }

    pub fn process(&self, current: PathBuf) -> SsgResult<PageNode> {
        let dest_dir = self.dest.join(&current);
        std::fs::create_dir_all(dest_dir)?;
        let mut res = vec![];
        for entry in read_dir(self.src.join(&current))? {
            let entry = entry?;
            let fname = entry.file_name();
            let fname = fname
                .to_str()
                .ok_or_else(|| SsgError::InvalidPath(entry.path()))?;
            let ftype = entry.file_type()?;
            if ftype.is_file() && fname.ends_with(".md") {
                res.push(self.process_markdown_file(
                    entry.path(),
                    current.clone(),
                    entry.metadata()?,
                )?);
            } else if ftype.is_dir() {
                let next_cur = current.join(fname);
                res.push(self.process(next_cur)?);
            } else {
                tracing::debug!(path = %entry.path().display(), "skipping");
            }
        }

        res.sort();

        let mut articles = vec![];
        let mut indexes = vec![];

        for x in res.iter() {
            match &x {
                PageNode::IndexPage(path, _) => indexes.push(path.join("index.json")),
                PageNode::Article(path, article) => articles.push(json! {
                    {
                        "created_at": article.created_at,
                        "modified_at": article.modified_at,
                        "title": article.title,
                        "tags": article.tags,
                        "path": path.to_path_buf()
                    }
                }),
            }
        }

        std::fs::write(
            self.dest.join(&current).join("index.json"),
            serde_json::to_string(&json! {
                {
                    "articles": articles,
                    "indexes": indexes
                }
            })?,
        )?;

        Ok(PageNode::IndexPage(current, res))
    }
}
