//! Front matter extraction.
//!
//! Hugo front matter is a `+++` block of `key = value` lines:
//!
//! ```text
//! +++
//! title = "My Post"
//! date = "2024-01-02T10:00:00Z"
//! tags = ["rust", "cli"]
//! +++
//! ```
//!
//! Values are read line by line, not as TOML: the body of the block only has
//! to be `key = value` pairs, and unknown keys are ignored.

use super::{
    PostError,
    block::{LineKind, MetadataState},
};
use crate::utils::{date::PubDate, slug::title_slug};

/// Characters removed from `categories`/`tags` values before splitting on `,`.
///
/// Turns `["rust", "cli"]` into `rust,cli`. Note that spaces inside a single
/// tag are removed too (`"open source"` becomes `opensource`).
pub const META_STRIP_CHARS: &[char] = &[' ', '"', '[', ']'];

/// Quote characters trimmed from both ends of keys and values.
const QUOTES: &[char] = &['"', '\''];

/// Recognized front matter fields. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    /// `title` lowercased with spaces replaced by hyphens.
    pub title_url_text: Option<String>,
    /// `date` as written.
    pub pubdate_long: Option<String>,
    /// `date` formatted as "January 02, 2024".
    pub pubdate_text: Option<String>,
    pub draft: Option<String>,
    pub image: Option<String>,
    /// `categories` as written.
    pub categories_list: Option<String>,
    pub categories: Option<Vec<String>>,
    /// `tags` as written.
    pub tags_list: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Metadata {
    /// Collect metadata from the `+++` block of `lines`.
    ///
    /// A block without closing delimiter runs to the end of the input.
    pub fn extract<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, PostError> {
        let mut meta = Self::default();
        let mut block = MetadataState::default();

        for line in lines {
            if block.classify(line) != LineKind::Metadata {
                continue;
            }
            if let Some((key, value)) = parse_pair(line) {
                meta.apply(key, value)?;
            }
        }

        Ok(meta)
    }

    /// Store a single `key = value` pair. Later keys overwrite earlier ones.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), PostError> {
        match key {
            "title" => {
                self.title_url_text = Some(title_slug(value));
                self.title = Some(value.to_owned());
            }
            "date" => {
                let date = PubDate::parse(value).ok_or_else(|| PostError::MalformedDate {
                    value: value.to_owned(),
                })?;
                self.pubdate_long = Some(value.to_owned());
                self.pubdate_text = Some(date.to_long_text());
            }
            "draft" => self.draft = Some(value.to_owned()),
            "image" => self.image = Some(value.to_owned()),
            "categories" => {
                self.categories = Some(split_list(value));
                self.categories_list = Some(value.to_owned());
            }
            "tags" => {
                self.tags = Some(split_list(value));
                self.tags_list = Some(value.to_owned());
            }
            _ => {}
        }
        Ok(())
    }

    /// Whether no recognized field was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Split a metadata line on its first `=`.
///
/// Returns `None` for lines without `=`.
fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once('=')?;
    Some((clean_value(key), clean_value(value)))
}

/// Trim whitespace, then surrounding quotes, then whitespace again.
///
/// Escapes are not interpreted: `"Say \"hi\""` becomes `Say \"hi\`.
fn clean_value(raw: &str) -> &str {
    raw.trim().trim_matches(QUOTES).trim()
}

/// Remove every [`META_STRIP_CHARS`] character from `raw`.
pub fn strip_meta_chars(raw: &str) -> String {
    raw.chars().filter(|c| !META_STRIP_CHARS.contains(c)).collect()
}

/// Turn a raw list value into its entries, dropping empty ones.
fn split_list(raw: &str) -> Vec<String> {
    strip_meta_chars(raw)
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
