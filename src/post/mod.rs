//! Source post preparation.
//!
//! # Pipeline
//!
//! ```text
//! Document::read() ──► lines
//!                        │
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   Metadata::extract()          filter_body()
//!          │                           │
//!          └──────────┬────────────────┘
//!                     ▼
//!        attribution::trailer() (optional)
//!                     │
//!                     ▼
//!          Post ──► PublishRequest
//! ```

pub mod attribution;
mod block;
mod error;
pub mod filter;
pub mod meta;

pub use error::PostError;
pub use meta::Metadata;

use crate::{
    config::PubConfig,
    publish::{CONTENT_FORMAT, PublishRequest},
};
use filter::filter_body;
use std::{
    borrow::Cow,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Raw source of a markdown post.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    source: String,
}

impl Document {
    /// Read a post from disk.
    pub fn read(path: &Path) -> Result<Self, PostError> {
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PostError::FileNotFound(path.to_path_buf()),
            _ => PostError::Io(path.to_path_buf(), err),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    #[cfg(test)]
    pub fn from_source(source: &str) -> Self {
        Self {
            path: PathBuf::from("<memory>"),
            source: source.to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines with their terminators kept.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.split_inclusive('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// A post ready to publish.
#[derive(Debug, Clone)]
pub struct Post<'a> {
    pub metadata: Metadata,
    pub title: String,
    /// Filtered body lines, plus the attribution trailer when enabled.
    pub lines: Vec<Cow<'a, str>>,
}

impl<'a> Post<'a> {
    /// Extract metadata, filter the body and append the attribution.
    pub fn prepare(doc: &'a Document, config: &PubConfig) -> Result<Self, PostError> {
        let metadata = Metadata::extract(doc.lines())?;

        let mut lines: Vec<Cow<'a, str>> = filter_body(doc.lines(), &config.filter)
            .into_iter()
            .map(Cow::Borrowed)
            .collect();

        if config.attribution.enable {
            // The trailer needs an empty line above it
            if lines.last().is_some_and(|line| !line.ends_with('\n')) {
                lines.push(Cow::Borrowed("\n"));
            }
            lines.push(Cow::Owned(attribution::trailer(
                &config.attribution,
                &metadata,
            )?));
        }

        let title = metadata
            .title
            .clone()
            .unwrap_or_else(|| config.post.default_title.clone());

        Ok(Self {
            metadata,
            title,
            lines,
        })
    }

    /// Final article body.
    pub fn body(&self) -> String {
        self.lines.concat()
    }

    pub fn to_request(&self, config: &PubConfig) -> PublishRequest {
        PublishRequest {
            title: self.title.clone(),
            content_format: CONTENT_FORMAT,
            content: self.body(),
            publish_status: config.medium.publish_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PublishStatus;

    const SAMPLE: &str = concat!(
        "+++\n",
        "title = \"My Post\"\n",
        "date = \"2024-01-02T09:00:00Z\"\n",
        "tags = [\"rust\"]\n",
        "+++\n",
        "\n",
        "Hello there.\n",
        "\n",
        "\n",
        "\n",
        "<img src=\"cover.png\">\n",
        "Bye.\n",
    );

    fn config() -> PubConfig {
        let mut config = PubConfig::default();
        config.attribution.domain_name = "tech.example.com".into();
        config.attribution.domain_url = "https://tech.example.com".into();
        config
    }

    #[test]
    fn test_read_missing_file() {
        let err = Document::read(Path::new("/nonexistent/post.md")).unwrap_err();
        assert!(matches!(err, PostError::FileNotFound(_)));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, SAMPLE).unwrap();

        let doc = Document::read(&path).unwrap();
        assert_eq!(doc.path(), path.as_path());
        assert_eq!(doc.line_count(), 12);
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::read(dir.path()).unwrap_err();
        assert!(matches!(err, PostError::Io(..)));
    }

    #[test]
    fn test_prepare_with_attribution() {
        let doc = Document::from_source(SAMPLE);
        let post = Post::prepare(&doc, &config()).unwrap();

        assert_eq!(post.title, "My Post");
        assert_eq!(
            post.body(),
            concat!(
                "Hello there.\n",
                "\n",
                "\n",
                "Bye.\n",
                "\n",
                "*Originally published at [tech.example.com](https://tech.example.com/posts/my-post/) on January 02, 2024.*",
            )
        );

        let last_line = post.body().lines().last().map(str::to_owned);
        assert_eq!(
            last_line.as_deref(),
            Some("*Originally published at [tech.example.com](https://tech.example.com/posts/my-post/) on January 02, 2024.*")
        );
    }

    #[test]
    fn test_prepare_attribution_after_unterminated_last_line() {
        let doc = Document::from_source(
            "+++\ntitle = \"My Post\"\ndate = \"2024-01-02\"\n+++\nLast paragraph",
        );
        let post = Post::prepare(&doc, &config()).unwrap();
        assert!(post.body().starts_with("Last paragraph\n\n*Originally published at"));
    }

    #[test]
    fn test_prepare_without_attribution() {
        let mut config = config();
        config.attribution.enable = false;

        let doc = Document::from_source(SAMPLE);
        let post = Post::prepare(&doc, &config).unwrap();
        assert_eq!(post.body(), "Hello there.\n\n\nBye.\n");
    }

    #[test]
    fn test_prepare_default_title() {
        let mut config = config();
        config.attribution.enable = false;
        config.post.default_title = "Untitled".into();

        let doc = Document::from_source("Just a body.\n");
        let post = Post::prepare(&doc, &config).unwrap();
        assert_eq!(post.title, "Untitled");
        assert!(post.metadata.is_empty());
    }

    #[test]
    fn test_prepare_missing_metadata_for_attribution() {
        let doc = Document::from_source("+++\ntitle = \"No Date\"\n+++\nBody\n");
        let err = Post::prepare(&doc, &config()).unwrap_err();
        assert!(matches!(err, PostError::MissingMetadata("pubdate_text")));
    }

    #[test]
    fn test_prepare_malformed_date() {
        let doc = Document::from_source("+++\ndate = \"02/01/2024\"\n+++\nBody\n");
        let err = Post::prepare(&doc, &config()).unwrap_err();
        assert!(matches!(err, PostError::MalformedDate { .. }));
    }

    #[test]
    fn test_prepare_unclosed_block() {
        let mut config = config();
        config.attribution.enable = false;

        let doc = Document::from_source("+++\ntitle = \"Open\"\nBody text\n");
        let post = Post::prepare(&doc, &config).unwrap();
        assert_eq!(post.title, "Open");
        assert_eq!(post.body(), "");
    }

    #[test]
    fn test_to_request() {
        let mut config = config();
        config.medium.publish_status = PublishStatus::Unlisted;

        let doc = Document::from_source(SAMPLE);
        let post = Post::prepare(&doc, &config).unwrap();
        let request = post.to_request(&config);

        assert_eq!(request.title, "My Post");
        assert_eq!(request.content_format, "markdown");
        assert_eq!(request.content, post.body());
        assert_eq!(request.publish_status, PublishStatus::Unlisted);
    }
}
