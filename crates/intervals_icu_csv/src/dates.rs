//! Calendar dates as accepted on the command line and forwarded to the API.

use crate::FetchError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date argument that parses as `YYYY-MM-DD`.
///
/// The caller's spelling is kept as-is: it is what goes into the `oldest` /
/// `newest` query parameters and into output file names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDate {
    raw: String,
    date: NaiveDate,
}

impl ReportDate {
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .ok()
            // chrono skips whitespace and takes signed or short years.
            .filter(|d| d.format(DATE_FORMAT).to_string() == s)
            .ok_or_else(|| FetchError::InvalidDate(s.to_string()))?;
        Ok(Self {
            raw: s.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for ReportDate {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Inclusive range sent as `oldest`..`newest`. Ordering is left to the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: ReportDate,
    pub end: ReportDate,
}

impl DateRange {
    pub fn new(start: ReportDate, end: ReportDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, FetchError> {
        Ok(Self::new(ReportDate::parse(start)?, ReportDate::parse(end)?))
    }

    pub fn query(&self) -> [(&'static str, &str); 2] {
        [("oldest", self.start.as_str()), ("newest", self.end.as_str())]
    }
}
