use crate::http_client::Transport;
use crate::{CsvFetcher, DateRange, FetchError, Report};
use std::path::{Path, PathBuf};

/// Files written by one export run, in fetch order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<(Report, PathBuf)>,
}

impl ExportSummary {
    pub fn path(&self, report: Report) -> Option<&Path> {
        self.files
            .iter()
            .find(|(r, _)| *r == report)
            .map(|(_, p)| p.as_path())
    }
}

/// Fetch every report in [`Report::ALL`] one after another. The first
/// failure aborts the run; later reports are not requested.
pub async fn export_reports<T: Transport>(
    fetcher: &CsvFetcher<T>,
    range: &DateRange,
    out_dir: &Path,
) -> Result<ExportSummary, FetchError> {
    let mut summary = ExportSummary::default();
    for report in Report::ALL {
        let path = fetcher.fetch_report(report, range, out_dir).await?;
        summary.files.push((report, path));
    }
    Ok(summary)
}
