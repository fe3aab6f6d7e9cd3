/// A contiguous, non-blank span of lines bounded by two adjacent cut points.
///
/// `start` and `end` are half-open line indices into the source line
/// collection; `content` is the trimmed, newline-joined text of
/// `lines[start..end]`. Segments are recomputed from the current lines and
/// boundaries on every call and are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl Segment {
    #[must_use]
    pub fn new(start: usize, end: usize, content: impl Into<String>) -> Self {
        debug_assert!(start < end, "a segment must span at least one line");

        Self {
            start,
            end,
            content: content.into(),
        }
    }

    /// Number of source lines the segment spans. Trimming can make `content`
    /// hold fewer lines than this.
    #[must_use]
    pub fn line_span(&self) -> usize { self.end - self.start }

    /// Whether `other`'s line range lies fully within this segment's range.
    #[must_use]
    pub fn contains(&self, other: &Segment) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}
