use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};

use chat_stats::{ChatAnalyzer, ChatBatcher, Config, OutputFormat, Report, Result};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "chat-stats.toml";

#[derive(Parser)]
#[command(name = "chat-stats")]
#[command(about = "Per-speaker chat statistics: average words per message and caps ratio")]
struct Args {
    /// Chat log with one `speaker: text` line per message ("-" or absent reads stdin)
    log: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Analyze the log in batches instead of as a whole
    #[arg(long)]
    batch: bool,

    /// Lines per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Logging level
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load_with_env(DEFAULT_CONFIG_FILE)?
        }
        None => {
            let mut config = Config::default();
            config.apply_env_overrides()?;
            config
        }
    };

    // Command line wins over file and environment
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.batch {
        config.batch.enabled = true;
    }
    if let Some(size) = args.batch_size {
        config.batch.size = size;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => {
            info!("Reading chat log from {}", p.display());
            Ok(Box::new(BufReader::new(File::open(p)?)))
        }
        _ => {
            info!("Reading chat log from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn emit(report: &Report, config: &Config, out: &mut dyn Write) -> Result<()> {
    match config.output.format {
        OutputFormat::Text => write!(out, "{}", report.render_text(config.output.precision))?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    Ok(())
}

fn analyze_whole(input: Box<dyn BufRead>, config: &Config, out: &mut dyn Write) -> Result<()> {
    let lines = chat_stats::read_log(input)?;
    let (stats, summary) = ChatAnalyzer::new().analyze_with_summary(&lines);
    if summary.dropped > 0 {
        debug!("{} lines had no speaker delimiter", summary.dropped);
    }
    emit(&Report::new(stats, summary), config, out)
}

fn analyze_batches(input: Box<dyn BufRead>, config: &Config, out: &mut dyn Write) -> Result<()> {
    let analyzer = ChatAnalyzer::new();
    let mut batcher = ChatBatcher::new(&config.batch, Instant::now());
    let mut count = 0;

    let mut report_batch = |batch: Vec<String>, out: &mut dyn Write| -> Result<()> {
        count += 1;
        let (stats, summary) = analyzer.analyze_with_summary(&batch);
        debug!("Batch {count}: {} lines, {} speakers", batch.len(), summary.speakers);
        let report = Report::new(stats, summary).with_batch(count);
        emit(&report, config, out)?;
        out.flush()?;
        Ok(())
    };

    for line in input.lines() {
        if let Some(batch) = batcher.push(line?, Instant::now()) {
            report_batch(batch, &mut *out)?;
        }
    }
    if let Some(batch) = batcher.flush(Instant::now()) {
        report_batch(batch, &mut *out)?;
    }

    Ok(())
}

fn run(args: Args, config: Config) -> Result<()> {
    let input = open_input(args.log.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.batch.enabled {
        info!(
            "Batch mode: {} lines or {}s per batch",
            config.batch.size, config.batch.interval_secs
        );
        analyze_batches(input, &config, &mut out)
    } else {
        analyze_whole(input, &config, &mut out)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("chat-stats: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    if let Err(e) = chat_stats::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        chat_stats::logging::init_console_only(&config.logging.level);
    }

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chat-stats: {e}");
            ExitCode::FAILURE
        }
    }
}
