use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Picks the filter directive for the subscriber.
///
/// Priority: `--quiet` > `-v` count > config level > default "warn".
/// `RUST_LOG` is consulted by [`init`] before this.
pub fn level_directive(verbose: u8, quiet: bool, config_level: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config_level.unwrap_or(DEFAULT_LEVEL).to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the stderr subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8, quiet: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_directive(verbose, quiet, config_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
