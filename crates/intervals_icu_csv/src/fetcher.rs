//! Authenticated download of one CSV report to disk.

use crate::http_client::{BasicAuth, Transport};
use crate::{Config, DateRange, FetchError, Report};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct CsvFetcher<T: Transport> {
    config: Config,
    transport: T,
}

impl<T: Transport> CsvFetcher<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base_url}/athlete/{athlete_id}/{endpoint}`
    pub fn report_url(&self, endpoint: &str) -> String {
        format!(
            "{}/athlete/{}/{}",
            self.config.base_url, self.config.athlete_id, endpoint
        )
    }

    /// Download `endpoint` for `range` and write the body verbatim to
    /// `destination`, creating parent directories and overwriting any
    /// existing file. Nothing is written unless the server answers 200.
    pub async fn fetch(
        &self,
        endpoint: &str,
        range: &DateRange,
        destination: &Path,
    ) -> Result<(), FetchError> {
        let api_key = self.config.require_api_key()?;
        if endpoint.is_empty() {
            return Err(FetchError::InvalidInput("endpoint must not be empty".into()));
        }

        let url = self.report_url(endpoint);
        info!(
            "requesting {endpoint} from {} to {}",
            range.start, range.end
        );
        let resp = self
            .transport
            .get(&url, &range.query(), &BasicAuth::api_key(api_key))
            .await?;
        if resp.status != 200 {
            return Err(FetchError::Remote {
                status: resp.status,
                body: resp.body_text(),
                url,
            });
        }

        write_file(destination, &resp.body).await?;
        info!(
            bytes = resp.body.len(),
            "saved {endpoint} to {}",
            destination.display()
        );
        Ok(())
    }

    /// Fetch `report` into `out_dir` under its date-range file name.
    pub async fn fetch_report(
        &self,
        report: Report,
        range: &DateRange,
        out_dir: &Path,
    ) -> Result<PathBuf, FetchError> {
        let destination = out_dir.join(report.file_name(range));
        self.fetch(report.endpoint(), range, &destination).await?;
        Ok(destination)
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let io_err = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, bytes).await.map_err(io_err)
}
