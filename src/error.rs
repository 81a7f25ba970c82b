use std::path::PathBuf;
use thiserror::Error;

pub type SsgResult<T> = Result<T, SsgError>;

#[derive(Debug, Error)]
pub enum SsgError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("config error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date format: {0:?}")]
    DateFormat(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("path is outside the source tree: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    #[error("invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}
