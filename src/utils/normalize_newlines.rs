/// Rewrite Windows (`\r\n`) and bare carriage-return (`\r`) line endings as
/// `\n` so line indices stay stable regardless of where the text was pasted
/// from.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
