//! Size- and interval-based batching of chat lines.
//!
//! A live chat is analyzed in small batches: a batch is emitted as soon as it
//! holds `size` lines, or once `interval` has elapsed since the previous
//! batch. The batcher owns no clock; callers pass the current [`Instant`].

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::trace;

use super::line::split_line;
use crate::config::BatchConfig;

/// Collects chat lines into batches.
#[derive(Debug)]
pub struct ChatBatcher {
    buffer: Vec<String>,
    size: usize,
    interval: Duration,
    last_flush: Instant,
    ignored: HashSet<String>,
}

impl ChatBatcher {
    /// Create a batcher. `now` starts the first interval.
    ///
    /// A `size` of zero is treated as one.
    pub fn new(config: &BatchConfig, now: Instant) -> Self {
        let size = config.size.max(1);
        Self {
            buffer: Vec::with_capacity(size),
            size,
            interval: Duration::from_secs(config.interval_secs),
            last_flush: now,
            ignored: config.ignored_speakers.iter().cloned().collect(),
        }
    }

    /// Number of lines waiting in the current batch.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether a line comes from an ignored speaker.
    pub fn is_ignored(&self, line: &str) -> bool {
        split_line(line).is_some_and(|l| self.ignored.contains(l.speaker))
    }

    /// Add a line. Returns the completed batch if this line filled it or the
    /// interval has elapsed.
    ///
    /// Lines from ignored speakers are dropped and never complete a batch.
    pub fn push(&mut self, line: impl Into<String>, now: Instant) -> Option<Vec<String>> {
        let line = line.into();
        if self.is_ignored(&line) {
            trace!(line = %line, "skipping line from ignored speaker");
            return None;
        }

        self.buffer.push(line);

        let elapsed = now.saturating_duration_since(self.last_flush);
        if self.buffer.len() >= self.size || elapsed >= self.interval {
            return self.take(now);
        }
        None
    }

    /// Emit whatever is pending. Returns `None` if nothing is buffered.
    pub fn flush(&mut self, now: Instant) -> Option<Vec<String>> {
        if self.buffer.is_empty() {
            return None;
        }
        self.take(now)
    }

    fn take(&mut self, now: Instant) -> Option<Vec<String>> {
        self.last_flush = now;
        let batch = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.size));
        trace!(lines = batch.len(), "batch complete");
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize, interval_secs: u64) -> BatchConfig {
        BatchConfig {
            enabled: true,
            size,
            interval_secs,
            ignored_speakers: Vec::new(),
        }
    }

    #[test]
    fn test_batch_by_size() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(3, 60), start);

        assert!(batcher.push("a: 1", start).is_none());
        assert!(batcher.push("a: 2", start).is_none());
        assert_eq!(batcher.pending(), 2);

        let batch = batcher.push("a: 3", start).unwrap();
        assert_eq!(batch, vec!["a: 1", "a: 2", "a: 3"]);
        assert_eq!(batcher.pending(), 0);
    }

    #[test]
    fn test_batch_by_interval() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(100, 10), start);

        assert!(batcher.push("a: early", start + Duration::from_secs(1)).is_none());
        let batch = batcher
            .push("a: late", start + Duration::from_secs(10))
            .unwrap();
        assert_eq!(batch, vec!["a: early", "a: late"]);
    }

    #[test]
    fn test_interval_restarts_after_batch() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(100, 10), start);

        assert!(batcher.push("a: 1", start + Duration::from_secs(12)).is_some());

        // 20s after start but only 8s after the last batch.
        assert!(batcher.push("a: 2", start + Duration::from_secs(20)).is_none());
        assert_eq!(
            batcher
                .push("a: 3", start + Duration::from_secs(22))
                .unwrap(),
            vec!["a: 2", "a: 3"]
        );
    }

    #[test]
    fn test_flush() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(5, 60), start);

        assert!(batcher.flush(start).is_none());

        batcher.push("a: 1", start);
        let batch = batcher.flush(start).unwrap();
        assert_eq!(batch, vec!["a: 1"]);
        assert!(batcher.flush(start).is_none());
    }

    #[test]
    fn test_ignored_speakers() {
        let start = Instant::now();
        let mut cfg = config(2, 60);
        cfg.ignored_speakers = vec!["statsbot".to_string()];
        let mut batcher = ChatBatcher::new(&cfg, start);

        assert!(batcher.is_ignored("statsbot: summary"));
        assert!(!batcher.is_ignored("statsbot summary"));
        assert!(!batcher.is_ignored("alice: hi"));

        assert!(batcher.push("statsbot: summary", start).is_none());
        assert!(batcher.push("alice: hi", start).is_none());
        assert_eq!(batcher.pending(), 1);
    }

    #[test]
    fn test_lines_without_delimiter_are_kept() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(2, 60), start);

        batcher.push("no delimiter", start);
        let batch = batcher.push("alice: hi", start).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_zero_size_treated_as_one() {
        let start = Instant::now();
        let mut batcher = ChatBatcher::new(&config(0, 60), start);
        assert_eq!(batcher.push("a: 1", start).unwrap(), vec!["a: 1"]);
    }
}
