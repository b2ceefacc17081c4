//! `[filter]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[filter]` section in medpub.toml - body line blocklist.
///
/// # Example
/// ```toml
/// [filter]
/// ignore_lines_containing = ["<img ", "{{< figure"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Body lines containing any of these substrings are dropped.
    #[serde(default = "defaults::filter::ignore_lines_containing")]
    #[educe(Default = defaults::filter::ignore_lines_containing())]
    pub ignore_lines_containing: Vec<String>,
}

impl FilterConfig {
    /// Whether `line` contains a blocklisted substring.
    pub fn is_blocked(&self, line: &str) -> bool {
        self.ignore_lines_containing
            .iter()
            .any(|needle| line.contains(needle.as_str()))
    }
}
