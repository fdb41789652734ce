//! Fetch intervals.icu CSV reports for a date range and persist them verbatim.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod dates;
pub mod export;
pub mod fetcher;
pub mod http_client;
pub mod report;
#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use dates::{DateRange, ReportDate};
pub use export::{ExportSummary, export_reports};
pub use fetcher::CsvFetcher;
pub use http_client::{BasicAuth, HttpResponse, ReqwestTransport, Transport};
pub use report::Report;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("HTTP {status} calling {url}\nresponse: {body}")]
    Remote {
        status: u16,
        url: String,
        body: String,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Status code of a rejected remote call, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
