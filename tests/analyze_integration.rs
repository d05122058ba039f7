//! Integration tests for chat log analysis.
//!
//! These tests exercise the public API end to end: loading a log from disk,
//! analyzing it, and rendering reports.

mod common;

use std::collections::BTreeSet;
use std::time::Instant;

use chat_stats::config::BatchConfig;
use chat_stats::{
    analyze_chat, format_line, load_log, split_line, ChatAnalyzer, ChatBatcher, Config,
    OutputFormat, Report,
};
use common::{approx_eq, temp_dir_with_file, write_temp_file, SAMPLE_LOG};

#[test]
fn test_load_and_analyze_log_file() {
    let file = write_temp_file(SAMPLE_LOG);
    let lines = load_log(file.path()).unwrap();
    assert_eq!(lines.len(), 4);

    let stats = analyze_chat(&lines);
    assert_eq!(stats.len(), 2);

    let alice = stats["alice"];
    assert!(approx_eq(alice.avg_words, 1.5));
    assert!(approx_eq(alice.caps_ratio, 1.0 / 3.0));

    let bob = stats["bob"];
    assert!(approx_eq(bob.avg_words, 2.0));
    assert_eq!(bob.caps_ratio, 0.0);
}

#[test]
fn test_key_set_matches_speakers_before_first_colon() {
    let lines = [
        "alice: hi",
        "bob:yo: nested",
        "no delimiter",
        ":anonymous",
        " padded : text",
        "alice: again",
        "",
    ];

    let expected: BTreeSet<String> = lines
        .iter()
        .filter_map(|line| split_line(line))
        .map(|line| line.speaker.to_string())
        .collect();
    let actual: BTreeSet<String> = analyze_chat(lines).into_keys().collect();

    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 4);
}

#[test]
fn test_regrouping_does_not_change_stats() {
    let base = [
        "carol: The QUICK brown fox",
        "dave: jumps",
        "carol: over",
        "dave: THE lazy DOG",
        "carol: ",
        "dave: !!!",
    ];
    let shuffled = [base[4], base[1], base[3], base[0], base[5], base[2]];

    let a = analyze_chat(base);
    let b = analyze_chat(shuffled);

    assert_eq!(a.len(), b.len());
    for (speaker, stats) in &a {
        assert!(approx_eq(stats.avg_words, b[speaker].avg_words));
        assert!(approx_eq(stats.caps_ratio, b[speaker].caps_ratio));
    }
}

#[test]
fn test_batches_cover_every_attributed_line() {
    let lines: Vec<String> = (0..12)
        .map(|i| format_line(if i % 2 == 0 { "even" } else { "odd" }, "one TWO"))
        .collect();

    let config = BatchConfig {
        enabled: true,
        size: 5,
        interval_secs: 3600,
        ignored_speakers: Vec::new(),
    };
    let now = Instant::now();
    let mut batcher = ChatBatcher::new(&config, now);
    let mut batches = Vec::new();
    for line in &lines {
        if let Some(batch) = batcher.push(line.as_str(), now) {
            batches.push(batch);
        }
    }
    if let Some(batch) = batcher.flush(now) {
        batches.push(batch);
    }

    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![5, 5, 2]);

    let analyzer = ChatAnalyzer::new();
    let attributed: usize = batches
        .iter()
        .map(|batch| analyzer.analyze_with_summary(batch).1.attributed)
        .sum();
    assert_eq!(attributed, lines.len());

    for batch in &batches {
        for stats in analyzer.analyze(batch).values() {
            assert!(approx_eq(stats.avg_words, 2.0));
            assert!(approx_eq(stats.caps_ratio, 0.5));
        }
    }
}

#[test]
fn test_config_file_drives_report_format() {
    let (_dir, path) = temp_dir_with_file(
        "chat-stats.toml",
        "[output]\nformat = \"json\"\nprecision = 2\n",
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let (stats, summary) = ChatAnalyzer::new().analyze_with_summary(SAMPLE_LOG.lines());
    let report = Report::new(stats, summary);

    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
    assert_eq!(json["summary"]["total_lines"], 4);
    assert_eq!(json["summary"]["dropped"], 1);
    assert_eq!(json["speakers"]["bob"]["avg_words"], 2.0);

    let text = report.render_text(config.output.precision);
    assert!(text.contains("1.50"));
}
