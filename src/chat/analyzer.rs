//! Chat analyzer.
//!
//! Groups chat lines by speaker and computes [`SpeakerStats`] for each.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::line::split_line;
use super::stats::{SpeakerStats, StatsAccumulator};

/// Result of an analysis: speaker to statistics, in lexicographic order.
pub type ChatStats = BTreeMap<String, SpeakerStats>;

/// Line counts collected during an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisSummary {
    /// Lines seen.
    pub total_lines: usize,
    /// Lines attributed to a speaker.
    pub attributed: usize,
    /// Lines dropped because they had no delimiter.
    pub dropped: usize,
    /// Distinct speakers.
    pub speakers: usize,
}

/// Computes per-speaker statistics over a finite collection of chat lines.
///
/// The analyzer holds no state; every call owns its own accumulators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatAnalyzer;

impl ChatAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze chat lines.
    ///
    /// Lines without a `:` are skipped. Never fails; empty input yields an
    /// empty map.
    pub fn analyze<I, S>(&self, messages: I) -> ChatStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.analyze_with_summary(messages).0
    }

    /// Analyze chat lines and also report how many lines were used.
    pub fn analyze_with_summary<I, S>(&self, messages: I) -> (ChatStats, AnalysisSummary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<String, StatsAccumulator> = BTreeMap::new();
        let mut summary = AnalysisSummary::default();

        for message in messages {
            summary.total_lines += 1;
            let Some(line) = split_line(message.as_ref()) else {
                summary.dropped += 1;
                continue;
            };
            summary.attributed += 1;

            match groups.get_mut(line.speaker) {
                Some(acc) => acc.add_body(line.body),
                None => {
                    let mut acc = StatsAccumulator::new();
                    acc.add_body(line.body);
                    groups.insert(line.speaker.to_string(), acc);
                }
            }
        }

        summary.speakers = groups.len();
        debug!(
            total = summary.total_lines,
            attributed = summary.attributed,
            dropped = summary.dropped,
            speakers = summary.speakers,
            "chat analysis complete"
        );

        let stats = groups
            .into_iter()
            .map(|(speaker, acc)| (speaker, acc.finish()))
            .collect();

        (stats, summary)
    }
}

/// Analyze chat lines with a default [`ChatAnalyzer`].
pub fn analyze_chat<I, S>(messages: I) -> ChatStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ChatAnalyzer::new().analyze(messages)
}
