//! Front matter block boundaries.
//!
//! Both the metadata extractor and the body filter walk the same lines through
//! [`MetadataState::classify`], so they always agree on where the block is.

/// Marker opening and closing the front matter block.
pub const DELIMITER: &str = "+++";

/// Position relative to the `+++` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetadataState {
    /// No delimiter seen yet.
    #[default]
    Unopened,
    /// Between the first and second delimiter.
    InMetadata,
    /// Second delimiter seen. The block never reopens.
    Closed,
}

/// What a single line is, as far as the front matter is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Delimiter,
    Metadata,
    Body,
}

impl MetadataState {
    /// Classify `line` and advance past it.
    ///
    /// Every line starting with `+++` is a delimiter. Only the first two
    /// change state; later ones are still kept out of the body.
    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.starts_with(DELIMITER) {
            *self = match self {
                Self::Unopened => Self::InMetadata,
                Self::InMetadata | Self::Closed => Self::Closed,
            };
            return LineKind::Delimiter;
        }

        match self {
            Self::InMetadata => LineKind::Metadata,
            Self::Unopened | Self::Closed => LineKind::Body,
        }
    }
}
