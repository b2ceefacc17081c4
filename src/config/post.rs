//! `[post]` section configuration.
//!
//! Where source posts live and how untitled posts are named.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[post]` section in medpub.toml.
///
/// # Example
/// ```toml
/// [post]
/// default_title = "Untitled"
/// directory = "~/site/content/posts"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostConfig {
    /// Title used when the front matter has no `title`.
    #[serde(default = "defaults::post::default_title")]
    #[educe(Default = defaults::post::default_title())]
    pub default_title: String,

    /// Base directory the CLI filename is resolved against.
    #[serde(default = "defaults::post::directory")]
    #[educe(Default = defaults::post::directory())]
    pub directory: PathBuf,
}
