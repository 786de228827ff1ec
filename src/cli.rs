use crate::config::{ColorChoice, OutputStyle};
use crate::filter::Criterion;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A simple log file parser: filter log lines by level, ids or date range
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file to parse
    #[arg(short = 'f', long = "file", global = true)]
    pub logfile: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short = 'F', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// When to colorize text output (overrides config)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(long, env = "LOG_JUGGLER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Repeat the search N times and print a timing report to stderr
    #[arg(long, value_name = "N", global = true)]
    pub profile: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show logs with given loglevel
    Loglevel {
        #[arg(value_enum, ignore_case = true)]
        loglevel: LogLevel,
    },
    /// Show logs with given session id
    Sid { sid: String },
    /// Show logs with given business id
    Bid { bid: String },
    /// Show logs with given request id
    Rid { rid: String },
    /// Show logs between two timestamps (inclusive, "YYYY-MM-DD HH:MM:SS")
    Date { start: String, end: String },
    /// Show logs matching a single expression, e.g. "sid:34523"
    Query { expression: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<OutputFormat> for OutputStyle {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => OutputStyle::Text,
            OutputFormat::Json => OutputStyle::Json,
            OutputFormat::Table => OutputStyle::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl Commands {
    /// Builds the criterion selected by this subcommand
    pub fn criterion(&self) -> anyhow::Result<Criterion> {
        let criterion = match self {
            Commands::Loglevel { loglevel } => Criterion::by_level(loglevel.as_str()),
            Commands::Sid { sid } => Criterion::by_session_id(sid),
            Commands::Bid { bid } => Criterion::by_business_id(bid),
            Commands::Rid { rid } => Criterion::by_request_id(rid),
            Commands::Date { start, end } => {
                Criterion::by_date_range(start.as_str(), end.as_str())?
            }
            Commands::Query { expression } => expression.parse::<Criterion>()?,
        };
        Ok(criterion)
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loglevel_is_case_insensitive() {
        let cli = Cli::try_parse_from(["log-juggler", "-f", "app.log", "loglevel", "warn"]).unwrap();
        assert_eq!(
            cli.command.criterion().unwrap(),
            Criterion::ByLevel("WARN".to_string())
        );
    }

    #[test]
    fn test_unknown_level_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["log-juggler", "-f", "a.log", "loglevel", "TRACE"]).is_err());
    }

    #[test]
    fn test_date_subcommand_validates_bounds() {
        let cli =
            Cli::try_parse_from(["log-juggler", "-f", "a.log", "date", "2012-09-13", "x"]).unwrap();
        assert!(cli.command.criterion().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "log-juggler",
            "sid",
            "34523",
            "-f",
            "a.log",
            "-F",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.logfile, Some(PathBuf::from("a.log")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }
}
