pub mod cli;
pub mod config;
pub mod display;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod profiler;
pub mod reader;
pub mod timestamp;

use crate::config::{ColorChoice, OutputStyle};
use crate::display::render_records;
use crate::profiler::Profiler;
use anyhow::{Context, anyhow};
use std::io::IsTerminal;
use tracing::info;

pub use cli::{Cli, ColorMode, Commands, LogLevel, OutputFormat, cli_parse};
pub use filter::{Criterion, CriterionParseError, DateBound, search_results};
pub use parser::{
    DisplayRecord, ParseError, ParsedRecord, business_id, log_level, log_message, log_time,
    parse_log_line, request_id, session_id,
};
pub use reader::{MalformedPolicy, ParseOutcome, parse_log_file, parse_log_lines, read_log_lines};
pub use timestamp::{TimestampFormatError, text_to_timestamp, timestamp_to_text};

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Repeats the search `runs` times and prints the timing report to stderr.
fn profiled_search(
    criterion: &Criterion,
    records: &[ParsedRecord],
    runs: u32,
) -> Vec<DisplayRecord> {
    let mut profiler = Profiler::new(format!("search_results({})", criterion.kind()));
    let mut results = Vec::new();
    for _ in 0..runs.max(1) {
        results = profiler.time(|| search_results(criterion, records));
    }
    eprint!("{}", profiler.report());
    results
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    let config = config::load_config(cli.config.as_deref()).context("Failed to load config")?;

    logging::init(cli.verbose, cli.quiet, config.logging.level.as_deref());

    let style = cli.format.map(OutputStyle::from).unwrap_or(config.output.format);
    let color = use_color(cli.color.map(ColorChoice::from).unwrap_or(config.output.color));
    let policy = if cli.strict {
        MalformedPolicy::Abort
    } else {
        config.input.on_malformed
    };

    let logfile = cli
        .logfile
        .as_deref()
        .ok_or_else(|| anyhow!("No log file given. Use -f/--file <PATH>"))?;
    let criterion = cli.command.criterion()?;

    info!(%criterion, file = %logfile.display(), ?policy, "starting search");

    let outcome = parse_log_file(logfile, policy)
        .with_context(|| format!("Failed to parse log file '{}'", logfile.display()))?;
    if !outcome.skipped_lines.is_empty() {
        info!(count = outcome.skipped_lines.len(), "skipped malformed lines");
    }

    let results = match cli.profile {
        Some(runs) => profiled_search(&criterion, &outcome.records, runs),
        None => search_results(&criterion, &outcome.records),
    };

    info!(
        matched = results.len(),
        total = outcome.records.len(),
        "search finished"
    );

    let rendered = render_records(&results, style, color).context("Failed to render results")?;
    print!("{rendered}");

    Ok(())
}
