#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes how a message's role and content were produced during
/// reconciliation, so callers and tests can tell recovered edits apart from
/// regenerated text without comparing strings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// A previous segment covered exactly the same line range; the stored
    /// message was carried over wholesale.
    ExactMatch,
    /// A previous segment fully contained the new one (a boundary was
    /// inserted inside it) and the stored content could be sliced by line
    /// offsets.
    ContainedSplit,
    /// A containing segment was found but its stored content no longer lines
    /// up with the span it was created from, so the content was regenerated
    /// from the source lines.
    SliceRejected,
    /// No previous segment corresponds to the new one; the message was built
    /// entirely from the freshly parsed text.
    NoMatch,
}
