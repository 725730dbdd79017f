//! Escape-aware splitting used by the modifier parser.
//!
//! A separator preceded by a backslash is not a split point; the backslash is consumed and the
//! separator is kept as literal text. Every other backslash is left untouched so that escapes
//! meant for a later stage survive this one.

/// Split `input` on unescaped `separator`, unescaping `\<separator>` in the pieces.
pub fn split_unescaped(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&separator) {
            current.push(separator);
            chars.next();
        } else if ch == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);

    parts
}
