//! Publishing boundary.
//!
//! [`Publisher`] takes a finished [`PublishRequest`] and creates the post
//! remotely. [`MediumClient`] is the only real implementation.

mod medium;

pub use medium::MediumClient;

use crate::config::PublishStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body format sent to Medium.
pub const CONTENT_FORMAT: &str = "markdown";

/// Payload of a post creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub title: String,
    pub content_format: &'static str,
    pub content: String,
    pub publish_status: PublishStatus,
}

/// Post record returned by Medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPost {
    pub id: String,
    pub title: String,
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub canonical_url: Option<String>,
    pub publish_status: String,
    #[serde(default)]
    pub published_at: Option<u64>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
}

/// Failures at the publishing boundary.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Medium rejected the access token ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Could not reach Medium")]
    Network(#[from] reqwest::Error),

    #[error("Medium rejected the post ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    #[error("Unexpected response from Medium: {0}")]
    InvalidResponse(String),
}

/// Something that can create a post from a request.
pub trait Publisher {
    fn publish(&self, request: &PublishRequest) -> Result<CreatedPost, PublishError>;
}
