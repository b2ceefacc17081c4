//! Body line filter.
//!
//! Walks the raw lines once and decides per line whether it belongs in the
//! published body. Rules, in order:
//!
//! 1. Front matter delimiters and metadata lines are dropped.
//! 2. Blank lines before the first non-blank body line are dropped.
//! 3. A line starting (after indentation) with ```` ``` ```` toggles fenced
//!    code. Lines inside a fence, and lines indented by two spaces or a tab,
//!    are code lines.
//! 4. Outside code, a blank line is dropped once more than [`MAX_BLANK_RUN`]
//!    consecutive blank lines have been seen.
//! 5. A line containing a blocklisted substring is dropped, code or not.
//!    Blocked lines leave the state untouched, so they neither end leading
//!    blank suppression nor reset the blank run. Filtering the output again
//!    yields the same lines.

use super::block::{LineKind, MetadataState};
use crate::config::FilterConfig;

/// Longest run of consecutive blank lines kept outside code.
pub const MAX_BLANK_RUN: usize = 2;

/// Fenced code block marker.
const FENCE: &str = "```";

/// Position within the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No non-blank body line seen yet.
    #[default]
    AwaitingContent,
    InBody,
    /// Inside a ```` ``` ```` fence.
    InCode,
}

/// Line-by-line body filter state machine.
#[derive(Debug)]
pub struct BodyFilter<'c> {
    blocklist: &'c FilterConfig,
    block: MetadataState,
    state: FilterState,
    /// Consecutive blank body lines up to and including the current one.
    blank_run: usize,
}

impl<'c> BodyFilter<'c> {
    pub fn new(blocklist: &'c FilterConfig) -> Self {
        Self {
            blocklist,
            block: MetadataState::default(),
            state: FilterState::default(),
            blank_run: 0,
        }
    }

    /// Decide whether `line` is kept, advancing the state past it.
    pub fn keep(&mut self, line: &str) -> bool {
        if self.block.classify(line) != LineKind::Body {
            return false;
        }
        // TODO: rewrite image/caption markup as <figure>/<figcaption>, which
        // Medium's publishing API accepts, instead of dropping those lines.
        if self.blocklist.is_blocked(line) {
            return false;
        }

        let blank = line.trim().is_empty();
        self.blank_run = if blank { self.blank_run + 1 } else { 0 };

        if self.state == FilterState::AwaitingContent {
            if blank {
                return false;
            }
            self.state = FilterState::InBody;
        }

        if line.trim_start().starts_with(FENCE) {
            self.state = match self.state {
                FilterState::InCode => FilterState::InBody,
                _ => FilterState::InCode,
            };
        }

        let is_code = self.state == FilterState::InCode || is_indented(line);
        !(blank && !is_code && self.blank_run > MAX_BLANK_RUN)
    }
}

/// Indented-code heuristic: two leading spaces or a leading tab.
fn is_indented(line: &str) -> bool {
    line.starts_with("  ") || line.starts_with('\t')
}

/// Filter `lines`, returning the kept ones in order.
pub fn filter_body<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    blocklist: &FilterConfig,
) -> Vec<&'a str> {
    let mut filter = BodyFilter::new(blocklist);
    lines.into_iter().filter(|line| filter.keep(line)).collect()
}
