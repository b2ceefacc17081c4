//! Back-link to the original post, appended after the body.

use super::{Metadata, PostError};
use crate::config::{
    AttributionConfig, DOMAIN_DIRECTORY_PLACEHOLDER, DOMAIN_NAME_PLACEHOLDER,
    DOMAIN_URL_PLACEHOLDER, POST_DATE_PLACEHOLDER, POST_LINK_PLACEHOLDER,
};

/// Render the attribution sentence, wrapped in `*` for emphasis.
///
/// Fails if the front matter lacks a `date` or a `title`.
pub fn render(config: &AttributionConfig, meta: &Metadata) -> Result<String, PostError> {
    let date = meta
        .pubdate_text
        .as_deref()
        .ok_or(PostError::MissingMetadata("pubdate_text"))?;
    let link = meta
        .title_url_text
        .as_deref()
        .ok_or(PostError::MissingMetadata("title_url_text"))?;

    let sentence = config
        .template
        .replace(DOMAIN_NAME_PLACEHOLDER, &config.domain_name)
        .replace(DOMAIN_URL_PLACEHOLDER, config.domain_url.trim_end_matches('/'))
        .replace(DOMAIN_DIRECTORY_PLACEHOLDER, config.directory.trim_matches('/'))
        .replace(POST_DATE_PLACEHOLDER, date)
        .replace(POST_LINK_PLACEHOLDER, link);

    Ok(format!("*{sentence}*"))
}

/// The element appended to the body lines: a blank line, then the sentence.
pub fn trailer(config: &AttributionConfig, meta: &Metadata) -> Result<String, PostError> {
    Ok(format!("\n{}", render(config, meta)?))
}
