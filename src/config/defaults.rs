//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [post] Section Defaults
// ============================================================================

pub mod post {
    use std::path::PathBuf;

    pub fn default_title() -> String {
        "My Title".into()
    }

    pub fn directory() -> PathBuf {
        "content/posts".into()
    }
}

// ============================================================================
// [medium] Section Defaults
// ============================================================================

pub mod medium {
    use super::super::PublishStatus;
    use std::path::PathBuf;

    pub fn api_url() -> String {
        "https://api.medium.com/v1".into()
    }

    pub fn publish_url() -> String {
        "https://medium.com".into()
    }

    pub fn username() -> Option<String> {
        None
    }

    pub fn publish_status() -> PublishStatus {
        PublishStatus::default()
    }

    pub fn token_path() -> Option<PathBuf> {
        None
    }
}

// ============================================================================
// [attribution] Section Defaults
// ============================================================================

pub mod attribution {
    pub fn domain_name() -> String {
        "example.com".into()
    }

    pub fn domain_url() -> String {
        "https://example.com".into()
    }

    pub fn directory() -> String {
        "posts".into()
    }

    pub fn template() -> String {
        "Originally published at [$$DOMAIN_NAME$$]($$DOMAIN_URL$$/$$DOMAIN_DIRECTORY$$/$$POST_LINK$$/) on $$POST_DATE$$."
            .into()
    }
}

// ============================================================================
// [filter] Section Defaults
// ============================================================================

pub mod filter {
    pub fn ignore_lines_containing() -> Vec<String> {
        vec!["<img ".into(), "\"caption\"".into()]
    }
}
