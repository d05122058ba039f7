//! Chat module for chat-stats.
//!
//! This module provides chat log analysis including:
//! - Line splitting (`speaker:body`)
//! - Per-speaker statistics (average words, caps ratio)
//! - Batching of incoming lines
//! - Reading chat logs from files or readers

mod analyzer;
mod batch;
mod line;
mod log;
mod stats;

pub use analyzer::{analyze_chat, AnalysisSummary, ChatAnalyzer, ChatStats};
pub use batch::ChatBatcher;
pub use line::{format_line, split_line, ChatLine, SPEAKER_DELIMITER};
pub use log::{load_log, read_log};
pub use stats::{count_letters, count_words, SpeakerStats, StatsAccumulator};
