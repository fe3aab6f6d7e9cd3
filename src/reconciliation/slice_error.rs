use thiserror::Error;

/// Error type for rejected content slices.
///
/// These never escape the crate's public API: a rejected slice makes the
/// affected segment fall back to its freshly parsed content, surfaced as
/// `ReconciliationOutcome::SliceRejected`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum SliceError {
    /// The requested line offsets don't describe a usable sub-range of the
    /// container's span.
    #[error(
        "invalid slice range: lines {start}..{end} requested from a span of {line_count} lines"
    )]
    InvalidRange {
        /// First line offset, relative to the container's start
        start: usize,
        /// One past the last line offset
        end: usize,
        /// Number of lines the container originally spanned
        line_count: usize,
    },

    /// The stored content re-splits into fewer lines than the span it was
    /// created from, meaning the edit merged lines and the offset mapping can
    /// no longer be trusted.
    #[error("stored content holds {actual} lines but its span covers {expected}")]
    LineCountCollapsed {
        /// Number of lines the container originally spanned
        expected: usize,
        /// Number of lines the stored content currently holds
        actual: usize,
    },

    /// The sliced fragment trims to nothing, so there is no usable content.
    #[error("sliced fragment is blank")]
    BlankSlice,
}
