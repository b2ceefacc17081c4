//! Publisher configuration for `medpub.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[post]`         | Source directory, fallback title                 |
//! | `[medium]`       | API endpoint, publish status, token location     |
//! | `[attribution]`  | Back-link to the original post                   |
//! | `[filter]`       | Substrings whose lines are dropped from the body |
//!
//! # Example
//!
//! ```toml
//! [post]
//! directory = "~/site/content/posts"
//!
//! [medium]
//! username = "alice"
//! token_path = "~/.medium-token"
//!
//! [attribution]
//! domain_name = "tech.example.com"
//! domain_url = "https://tech.example.com"
//! ```

mod attribution;
pub mod defaults;
mod error;
mod filter;
mod medium;
mod post;

pub use attribution::{
    AttributionConfig, DOMAIN_DIRECTORY_PLACEHOLDER, DOMAIN_NAME_PLACEHOLDER,
    DOMAIN_URL_PLACEHOLDER, POST_DATE_PLACEHOLDER, POST_LINK_PLACEHOLDER,
};
pub use error::ConfigError;
pub use filter::FilterConfig;
pub use medium::{MediumConfig, PublishStatus, Token};

use anyhow::{Result, bail};
use educe::Educe;
use medium::TOKEN_ENV;
use post::PostConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MEDPUB_CONFIG";

/// Config file looked up in the working directory by default.
pub const CONFIG_FILE: &str = "medpub.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing medpub.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PubConfig {
    /// Path the config was loaded from (`None` when running on defaults)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Source post settings
    #[serde(default)]
    pub post: PostConfig,

    /// Medium API settings
    #[serde(default)]
    pub medium: MediumConfig,

    /// Attribution line settings
    #[serde(default)]
    pub attribution: AttributionConfig,

    /// Body line blocklist
    #[serde(default)]
    pub filter: FilterConfig,
}

impl PubConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: PubConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load from `$MEDPUB_CONFIG` or `./medpub.toml`, then expand and validate.
    ///
    /// A missing default file is not an error; every option has a default.
    /// An explicitly named file must exist.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_path(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        config.expand_paths();
        config.validate()?;
        Ok(config)
    }

    /// Resolve the CLI filename against `[post] directory`.
    pub fn post_path(&self, file: &Path) -> PathBuf {
        self.post.directory.join(file)
    }

    /// Expand `~` in all configured paths
    fn expand_paths(&mut self) {
        self.post.directory = Self::expand_tilde(&self.post.directory);
        if let Some(path) = &self.medium.token_path {
            self.medium.token_path = Some(Self::expand_tilde(path));
        }
    }

    fn expand_tilde(path: &Path) -> PathBuf {
        let raw = path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.medium.api_url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[medium.api_url] must start with http:// or https://".into()
            ));
        }

        if self.attribution.enable {
            if !self.attribution.domain_url.starts_with("http") {
                bail!(ConfigError::Validation(
                    "[attribution.domain_url] must start with http:// or https://".into()
                ));
            }
            for placeholder in [POST_DATE_PLACEHOLDER, POST_LINK_PLACEHOLDER] {
                if !self.attribution.template.contains(placeholder) {
                    bail!(ConfigError::Validation(format!(
                        "[attribution.template] must contain `{placeholder}`"
                    )));
                }
            }
        }

        if self.filter.ignore_lines_containing.iter().any(String::is_empty) {
            bail!(ConfigError::Validation(
                "[filter.ignore_lines_containing] must not contain empty strings".into()
            ));
        }

        Ok(())
    }

    /// Describe where the access token comes from, without revealing it.
    pub fn token_source(&self) -> String {
        if std::env::var_os(TOKEN_ENV).is_some() {
            format!("${TOKEN_ENV}")
        } else {
            match &self.medium.token_path {
                Some(path) => path.display().to_string(),
                None => "<none>".into(),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config = PubConfig::from_str(
            r#"
            [post]
            default_title = "Untitled"

            [attribution]
            domain_name = "tech.example.com"
        "#,
        )
        .unwrap();

        assert_eq!(config.post.default_title, "Untitled");
        assert_eq!(config.attribution.domain_name, "tech.example.com");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = PubConfig::from_str("[post\ndefault_title = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_records_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[medium]\nusername = \"alice\"\n").unwrap();

        let config = PubConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.medium.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PubConfig::from_path(Path::new("/nonexistent/medpub.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PubConfig::default().validate().is_ok());
    }

    #[test]
    fn test_post_path_joins_directory() {
        let mut config = PubConfig::default();
        config.post.directory = PathBuf::from("/srv/posts");

        assert_eq!(
            config.post_path(Path::new("hello.md")),
            PathBuf::from("/srv/posts/hello.md")
        );
        // Absolute filenames replace the base directory
        assert_eq!(
            config.post_path(Path::new("/tmp/other.md")),
            PathBuf::from("/tmp/other.md")
        );
    }

    #[test]
    fn test_expand_paths_keeps_plain_paths() {
        let mut config = PubConfig::default();
        config.medium.token_path = Some(PathBuf::from("/etc/medium-token"));
        config.expand_paths();

        assert_eq!(config.post.directory, PathBuf::from("content/posts"));
        assert_eq!(
            config.medium.token_path,
            Some(PathBuf::from("/etc/medium-token"))
        );
    }

    #[test]
    fn test_expand_paths_tilde() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let mut config = PubConfig::default();
        config.post.directory = PathBuf::from("~/site/posts");
        config.expand_paths();

        assert!(!config.post.directory.to_string_lossy().starts_with('~'));
        assert!(config.post.directory.ends_with("site/posts"));
    }

    #[test]
    fn test_validate_rejects_bad_api_url() {
        let mut config = PubConfig::default();
        config.medium.api_url = "api.medium.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_domain_url() {
        let mut config = PubConfig::default();
        config.attribution.domain_url = "example.com".into();
        assert!(config.validate().is_err());

        // Not checked when attribution is off
        config.attribution.enable = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_placeholders() {
        let mut config = PubConfig::default();
        config.attribution.template = "Originally published on $$POST_DATE$$.".into();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("$$POST_LINK$$"));
    }

    #[test]
    fn test_validate_rejects_empty_blocklist_entry() {
        let mut config = PubConfig::default();
        config.filter.ignore_lines_containing.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [post]
            default_title = "Untitled"
            directory = "/home/alice/site/content/posts"

            [medium]
            api_url = "https://api.medium.com/v1"
            publish_url = "https://medium.com"
            username = "alice"
            publish_status = "public"
            token_path = "/home/alice/.medium-token"

            [attribution]
            enable = true
            domain_name = "tech.example.com"
            domain_url = "https://tech.example.com"
            directory = "posts"

            [filter]
            ignore_lines_containing = ["<img ", "<figcaption"]
        "#;
        let config = PubConfig::from_str(config).unwrap();

        assert_eq!(config.post.default_title, "Untitled");
        assert_eq!(config.medium.publish_status, PublishStatus::Public);
        assert_eq!(config.attribution.domain_url, "https://tech.example.com");
        assert_eq!(config.filter.ignore_lines_containing.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [deploy]
            provider = "github"
        "#;
        let result: Result<PubConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
