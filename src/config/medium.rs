//! `[medium]` section configuration.
//!
//! Contains the API endpoint, publish status and credentials location.

use super::{defaults, error::ConfigError};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf};

/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "MEDIUM_TOKEN";

/// Medium integration token. `Debug` never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[cfg(test)]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Visibility of the created post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Public,
    Unlisted,
}

/// `[medium]` section in medpub.toml.
///
/// # Example
/// ```toml
/// [medium]
/// username = "alice"
/// publish_status = "draft"
/// token_path = "~/.medium-token"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MediumConfig {
    /// Base URL of the Medium REST API.
    #[serde(default = "defaults::medium::api_url")]
    #[educe(Default = defaults::medium::api_url())]
    pub api_url: String,

    /// Medium web URL, used to point at the drafts page.
    #[serde(default = "defaults::medium::publish_url")]
    #[educe(Default = defaults::medium::publish_url())]
    pub publish_url: String,

    /// Expected account name. A different authenticated user is reported.
    #[serde(default = "defaults::medium::username")]
    #[educe(Default = defaults::medium::username())]
    pub username: Option<String>,

    /// Status sent with the created post.
    #[serde(default = "defaults::medium::publish_status")]
    #[educe(Default = defaults::medium::publish_status())]
    pub publish_status: PublishStatus,

    /// Path to file containing the Medium integration token.
    ///
    /// # Security
    /// - Store outside the blog repository (e.g., `~/.medium-token`)
    /// - `MEDIUM_TOKEN` in the environment takes precedence
    #[serde(default = "defaults::medium::token_path")]
    #[educe(Default = defaults::medium::token_path())]
    pub token_path: Option<PathBuf>,
}

impl MediumConfig {
    /// Load the access token from `MEDIUM_TOKEN`, falling back to `token_path`.
    pub fn load_token(&self) -> Result<Token, ConfigError> {
        self.resolve_token(std::env::var(TOKEN_ENV).ok())
    }

    fn resolve_token(&self, from_env: Option<String>) -> Result<Token, ConfigError> {
        if let Some(secret) = from_env.map(|s| s.trim().to_owned())
            && !secret.is_empty()
        {
            return Ok(Token(secret));
        }

        let path = self.token_path.as_ref().ok_or(ConfigError::MissingToken)?;
        let secret = fs::read_to_string(path).map_err(|err| ConfigError::Io(path.clone(), err))?;
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(Token(secret.to_owned()))
    }
}
