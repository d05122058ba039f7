//! Chat line handling.
//!
//! Chat lines loosely follow the `speaker:text` convention. The speaker is
//! everything before the first `:` and is kept verbatim.

/// Delimiter between speaker and body.
pub const SPEAKER_DELIMITER: char = ':';

/// A chat line split into speaker and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLine<'a> {
    /// Text before the first delimiter. May be empty.
    pub speaker: &'a str,
    /// Text after the first delimiter. May be empty.
    pub body: &'a str,
}

/// Split a raw line at its first `:`.
///
/// Returns `None` if the line has no delimiter. Neither part is trimmed.
pub fn split_line(line: &str) -> Option<ChatLine<'_>> {
    line.split_once(SPEAKER_DELIMITER)
        .map(|(speaker, body)| ChatLine { speaker, body })
}

/// Format an incoming message as a chat line (`"author: content"`).
pub fn format_line(author: &str, content: &str) -> String {
    format!("{author}{SPEAKER_DELIMITER} {content}")
}
