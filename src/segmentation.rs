use crate::types::segment::Segment;

/// Cuts `lines` into contiguous segments at the given boundaries.
///
/// A boundary `b` means "a message break occurs before line `b`". Boundaries
/// outside of `(0, lines.len())` are discarded, duplicates are collapsed and
/// the remainder is sorted before cutting; the end of the line collection
/// always closes the last segment, so the emitted spans partition
/// `[0, lines.len())`.
///
/// Segments whose trimmed content is empty are absorbed: their lines produce
/// nothing, and the following segment still starts after them.
///
/// ## Example
///
/// ```not_rust
/// (["A", "B", "C"], [1]) -> [0..1 "A", 1..3 "B\nC"]
/// (["A", "", "C"], [1, 2]) -> [0..1 "A", 2..3 "C"]
/// ```
#[must_use]
pub fn build_segments<S: AsRef<str>>(lines: &[S], boundaries: &[usize]) -> Vec<Segment> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut cuts = normalize_boundaries(boundaries, lines.len());
    cuts.push(lines.len());

    let mut segments = Vec::with_capacity(cuts.len());
    let mut previous_cut = 0;

    for cut in cuts {
        let content = lines[previous_cut..cut]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = content.trim();

        if !trimmed.is_empty() {
            segments.push(Segment::new(previous_cut, cut, trimmed));
        }

        previous_cut = cut;
    }

    segments
}

/// Keep only boundaries that fall strictly inside the line collection,
/// deduplicated and in ascending order.
fn normalize_boundaries(boundaries: &[usize], line_count: usize) -> Vec<usize> {
    let mut normalized: Vec<usize> = boundaries
        .iter()
        .copied()
        .filter(|&boundary| boundary > 0 && boundary < line_count)
        .collect();

    normalized.sort_unstable();
    normalized.dedup();

    normalized
}
