use crate::{
    reconciliation::slice_error::SliceError, utils::normalize_newlines::normalize_newlines,
};

/// Carves the lines `[start_offset, end_offset)` out of a stored message
/// body whose segment originally spanned `expected_line_count` lines.
///
/// The stored content is re-split under the same newline normalization as
/// composer input. The slice is rejected when the offsets are not a usable
/// sub-range, when the stored content holds fewer lines than its span (the
/// user's edit merged lines, so offsets no longer map onto the text), or
/// when the fragment trims to nothing.
///
/// This is a best-effort heuristic, not a diff: heavy edits near a boundary
/// lose fine-grained attribution and the caller regenerates the content.
pub(crate) fn slice_by_line_offsets(
    stored: &str,
    start_offset: usize,
    end_offset: usize,
    expected_line_count: usize,
) -> Result<String, SliceError> {
    if end_offset <= start_offset || expected_line_count == 0 || end_offset > expected_line_count {
        return Err(SliceError::InvalidRange {
            start: start_offset,
            end: end_offset,
            line_count: expected_line_count,
        });
    }

    let normalized = normalize_newlines(stored);
    let stored_lines: Vec<&str> = normalized.split('\n').collect();

    if stored_lines.len() < expected_line_count {
        return Err(SliceError::LineCountCollapsed {
            expected: expected_line_count,
            actual: stored_lines.len(),
        });
    }

    let fragment = stored_lines[start_offset..end_offset].join("\n");
    let trimmed = fragment.trim();

    if trimmed.is_empty() {
        return Err(SliceError::BlankSlice);
    }

    Ok(trimmed.to_owned())
}
