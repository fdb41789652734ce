use clap::Parser;
use intervals_icu_csv::{DateRange, ReportDate};
use std::path::PathBuf;

/// Download activities.csv and wellness.csv from intervals.icu for a date range.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: ReportDate,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub end: ReportDate,

    /// Output directory
    #[arg(long, default_value = "data")]
    pub out_dir: PathBuf,
}

impl Args {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start.clone(), self.end.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_required_flags_with_default_out_dir() {
        let args = Args::try_parse_from(["fetch", "--start", "2024-01-01", "--end", "2024-01-31"])
            .expect("args");
        assert_eq!(args.start.as_str(), "2024-01-01");
        assert_eq!(args.end.as_str(), "2024-01-31");
        assert_eq!(args.out_dir, PathBuf::from("data"));
    }

    #[test]
    fn accepts_out_dir() {
        let args = Args::try_parse_from([
            "fetch", "--start", "2024-01-01", "--end", "2024-01-31", "--out-dir", "/tmp/reports",
        ])
        .expect("args");
        assert_eq!(args.out_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn rejects_malformed_date() {
        let err = Args::try_parse_from(["fetch", "--start", "2024/01/01", "--end", "2024-01-31"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn requires_both_dates() {
        let err = Args::try_parse_from(["fetch", "--start", "2024-01-01"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let args = Args::try_parse_from(["fetch", "--start", "2024-02-01", "--end", "2024-01-01"])
            .expect("args");
        let range = args.range();
        assert_eq!(range.start.as_str(), "2024-02-01");
        assert_eq!(range.end.as_str(), "2024-01-01");
    }
}
