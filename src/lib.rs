//! chat-stats - per-speaker chat statistics
//!
//! Computes the average number of words per message and the ratio of
//! uppercase letters for every speaker in a `speaker:text` chat log.

pub mod chat;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use chat::{
    analyze_chat, format_line, load_log, read_log, split_line, AnalysisSummary, ChatAnalyzer,
    ChatBatcher, ChatLine, ChatStats, SpeakerStats,
};
pub use config::{Config, OutputFormat};
pub use error::{ChatStatsError, Result};
pub use report::Report;
