//! Per-speaker statistics.

use serde::{Deserialize, Serialize};

/// Statistics for one speaker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeakerStats {
    /// Average number of words per message.
    pub avg_words: f64,
    /// Uppercase letters divided by alphabetic letters, in `[0.0, 1.0]`.
    pub caps_ratio: f64,
}

/// Running totals for one speaker.
///
/// All fields are plain sums, so accumulators can be merged in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsAccumulator {
    messages: usize,
    words: usize,
    alpha: usize,
    upper: usize,
}

impl StatsAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one message body.
    pub fn add_body(&mut self, body: &str) {
        let (alpha, upper) = count_letters(body);
        self.messages += 1;
        self.words += count_words(body);
        self.alpha += alpha;
        self.upper += upper;
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &StatsAccumulator) {
        self.messages += other.messages;
        self.words += other.words;
        self.alpha += other.alpha;
        self.upper += other.upper;
    }

    /// Number of message bodies added.
    pub fn message_count(&self) -> usize {
        self.messages
    }

    /// Total word count across all bodies.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Compute the final statistics.
    pub fn finish(&self) -> SpeakerStats {
        let avg_words = if self.messages > 0 {
            self.words as f64 / self.messages as f64
        } else {
            0.0
        };
        let caps_ratio = if self.alpha > 0 {
            self.upper as f64 / self.alpha as f64
        } else {
            0.0
        };
        SpeakerStats {
            avg_words,
            caps_ratio,
        }
    }
}

/// Word separators: the C locale whitespace set.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Count whitespace-delimited tokens in `body`.
pub fn count_words(body: &str) -> usize {
    body.as_bytes()
        .split(|&b| is_separator(b))
        .filter(|token| !token.is_empty())
        .count()
}

/// Count `(alphabetic, uppercase)` ASCII letters in `body`.
///
/// Bytes outside ASCII are never letters.
pub fn count_letters(body: &str) -> (usize, usize) {
    body.bytes()
        .filter(u8::is_ascii_alphabetic)
        .fold((0, 0), |(alpha, upper), b| {
            (alpha + 1, upper + usize::from(b.is_ascii_uppercase()))
        })
}
