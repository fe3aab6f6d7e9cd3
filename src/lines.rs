use crate::utils::normalize_newlines::normalize_newlines;

/// Splits raw pasted text into lines, treating `\r\n` and `\r` as `\n`.
///
/// Empty lines are preserved as empty strings so that boundary indices stay
/// offset-stable. Input consisting solely of blank lines yields an empty
/// vector, signalling that there is no content yet.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "one\r\n\r\ntwo" -> ["one", "", "two"]
/// "  \n\t" -> []
/// ```
#[must_use]
pub fn split_into_lines(raw: &str) -> Vec<String> {
    let normalized = normalize_newlines(raw);
    let lines: Vec<String> = normalized.split('\n').map(str::to_owned).collect();

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Vec::new();
    }

    lines
}
