//! Command-line front end for the intervals.icu CSV export.

use intervals_icu_csv::{Config, CsvFetcher, ExportSummary, Transport, export_reports};

pub mod cli;

pub use cli::Args;

/// Per-target overrides appended to the user filter to keep HTTP internals quiet.
const QUIET_TARGETS: &str = "hyper=warn,reqwest=warn";

/// Log filter from `INTERVALS_LOG_LEVEL`, falling back to `RUST_LOG`, default `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let level = get("INTERVALS_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string());
    format!("{level},{QUIET_TARGETS}")
}

pub fn init_tracing() {
    let combined_filter = log_filter_with(|k| std::env::var(k).ok());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("info,{QUIET_TARGETS}")));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("log filter: {}", combined_filter);
}

/// Export both reports for `args` and return what was written.
pub async fn run<T: Transport>(
    args: &Args,
    config: Config,
    transport: T,
) -> Result<ExportSummary, intervals_icu_csv::FetchError> {
    let fetcher = CsvFetcher::new(config, transport);
    export_reports(&fetcher, &args.range(), &args.out_dir).await
}
