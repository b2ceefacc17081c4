//! `[attribution]` section configuration.
//!
//! Describes the back-link appended to the article body.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Replaced with the long-form publish date.
pub const POST_DATE_PLACEHOLDER: &str = "$$POST_DATE$$";
/// Replaced with the title slug.
pub const POST_LINK_PLACEHOLDER: &str = "$$POST_LINK$$";
/// Replaced with [`AttributionConfig::domain_name`].
pub const DOMAIN_NAME_PLACEHOLDER: &str = "$$DOMAIN_NAME$$";
/// Replaced with [`AttributionConfig::domain_url`].
pub const DOMAIN_URL_PLACEHOLDER: &str = "$$DOMAIN_URL$$";
/// Replaced with [`AttributionConfig::directory`].
pub const DOMAIN_DIRECTORY_PLACEHOLDER: &str = "$$DOMAIN_DIRECTORY$$";

/// `[attribution]` section in medpub.toml.
///
/// # Example
/// ```toml
/// [attribution]
/// enable = true
/// domain_name = "tech.example.com"
/// domain_url = "https://tech.example.com"
/// directory = "posts"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AttributionConfig {
    /// Append the attribution line to the body.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Display name of the original site.
    #[serde(default = "defaults::attribution::domain_name")]
    #[educe(Default = defaults::attribution::domain_name())]
    pub domain_name: String,

    /// Base URL of the original site.
    #[serde(default = "defaults::attribution::domain_url")]
    #[educe(Default = defaults::attribution::domain_url())]
    pub domain_url: String,

    /// Path segment holding posts on the original site.
    #[serde(default = "defaults::attribution::directory")]
    #[educe(Default = defaults::attribution::directory())]
    pub directory: String,

    /// Sentence template. Must contain `$$POST_DATE$$` and `$$POST_LINK$$`.
    #[serde(default = "defaults::attribution::template")]
    #[educe(Default = defaults::attribution::template())]
    pub template: String,
}

#[cfg(test)]
mod tests {
    use super::super::PubConfig;
    use super::*;

    #[test]
    fn test_attribution_config() {
        let config = r#"
            [attribution]
            enable = false
            domain_name = "tech.example.com"
            domain_url = "https://tech.example.com"
            directory = "blog"
            template = "Seen first on $$POST_DATE$$ at $$POST_LINK$$"
        "#;
        let config: PubConfig = toml::from_str(config).unwrap();

        assert!(!config.attribution.enable);
        assert_eq!(config.attribution.domain_name, "tech.example.com");
        assert_eq!(config.attribution.domain_url, "https://tech.example.com");
        assert_eq!(config.attribution.directory, "blog");
        assert!(config.attribution.template.starts_with("Seen first"));
    }

    #[test]
    fn test_attribution_config_defaults() {
        let config: PubConfig = toml::from_str("").unwrap();

        assert!(config.attribution.enable);
        assert_eq!(config.attribution.directory, "posts");
        assert!(config.attribution.template.contains(POST_DATE_PLACEHOLDER));
        assert!(config.attribution.template.contains(POST_LINK_PLACEHOLDER));
        assert!(config.attribution.template.contains(DOMAIN_URL_PLACEHOLDER));
    }

    #[test]
    fn test_attribution_default_matches_serde_default() {
        let from_toml: PubConfig = toml::from_str("").unwrap();
        let from_default = AttributionConfig::default();

        assert_eq!(from_toml.attribution.enable, from_default.enable);
        assert_eq!(from_toml.attribution.template, from_default.template);
    }
}
