//! Report rendering for chat statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::chat::{AnalysisSummary, ChatStats};
use crate::Result;

/// Header of the speaker column in text reports.
const SPEAKER_HEADER: &str = "speaker";

/// Statistics for one analyzed collection of lines.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Batch number (1-based) when analyzing in batch mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<usize>,
    /// Line counts.
    pub summary: AnalysisSummary,
    /// Per-speaker statistics.
    pub speakers: ChatStats,
}

impl Report {
    /// Create a report timestamped now.
    pub fn new(speakers: ChatStats, summary: AnalysisSummary) -> Self {
        Self::with_timestamp(speakers, summary, Utc::now())
    }

    /// Create a report with an explicit timestamp.
    pub fn with_timestamp(
        speakers: ChatStats,
        summary: AnalysisSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at,
            batch: None,
            summary,
            speakers,
        }
    }

    /// Tag the report with a batch number.
    pub fn with_batch(mut self, batch: usize) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Render as a plain-text table.
    ///
    /// Speakers are shown `{:?}`-quoted so empty or padded names stay visible.
    pub fn render_text(&self, precision: usize) -> String {
        let mut out = String::new();

        if let Some(n) = self.batch {
            out.push_str(&format!("# batch {n}\n"));
        }
        out.push_str(&format!(
            "# {} lines, {} attributed, {} dropped, {} speakers\n",
            self.summary.total_lines,
            self.summary.attributed,
            self.summary.dropped,
            self.summary.speakers
        ));

        let names: Vec<String> = self.speakers.keys().map(|s| format!("{s:?}")).collect();
        let width = names
            .iter()
            .map(|n| n.chars().count())
            .chain(std::iter::once(SPEAKER_HEADER.len()))
            .max()
            .unwrap_or(SPEAKER_HEADER.len());

        out.push_str(&format!(
            "{SPEAKER_HEADER:<width$}  {:>12}  {:>12}\n",
            "avg_words", "caps_ratio"
        ));
        for (name, stats) in names.iter().zip(self.speakers.values()) {
            out.push_str(&format!(
                "{name:<width$}  {:>12.precision$}  {:>12.precision$}\n",
                stats.avg_words, stats.caps_ratio
            ));
        }

        out
    }

    /// Render as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
