//! Publish date parsing for front matter `date` values.
//!
//! Hugo writes dates as `2024-01-02` or full RFC 3339 timestamps such as
//! `2024-01-02T10:00:00Z`. Only the leading `YYYY-MM-DD` part matters here.

use chrono::NaiveDate;

/// Number of leading characters holding the `YYYY-MM-DD` date.
const DATE_PREFIX_LEN: usize = 10;

/// Long-form output, e.g. "January 02, 2024".
const LONG_FORMAT: &str = "%B %d, %Y";

/// Calendar date of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubDate(NaiveDate);

impl PubDate {
    /// Parse the first 10 characters of `s` as `YYYY-MM-DD`.
    ///
    /// Returns `None` when the prefix is missing or not a valid calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        let prefix = s.get(..DATE_PREFIX_LEN)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok().map(Self)
    }

    /// Format as "Month DD, YYYY".
    pub fn to_long_text(self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }
}
