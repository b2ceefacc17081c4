//! Errors raised while reading and preparing a post.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Markdown file not found: `{0}`")]
    FileNotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Malformed date in front matter: `{value}` (expected YYYY-MM-DD)")]
    MalformedDate { value: String },

    #[error("Attribution requires `{0}` in front matter")]
    MissingMetadata(&'static str),
}
