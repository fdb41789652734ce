use crate::DateRange;
use std::fmt;

/// The CSV reports exported per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Report {
    Activities,
    Wellness,
}

impl Report {
    /// Export order. Wellness is only fetched once activities succeeded.
    pub const ALL: [Report; 2] = [Report::Activities, Report::Wellness];

    /// Path segment under `/athlete/{id}/`.
    pub fn endpoint(self) -> &'static str {
        match self {
            Report::Activities => "activities.csv",
            Report::Wellness => "wellness.csv",
        }
    }

    pub fn file_prefix(self) -> &'static str {
        match self {
            Report::Activities => "activities",
            Report::Wellness => "wellness",
        }
    }

    /// `<prefix>_<start>_to_<end>.csv`
    pub fn file_name(self, range: &DateRange) -> String {
        format!(
            "{}_{}_to_{}.csv",
            self.file_prefix(),
            range.start,
            range.end
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_range() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(
            Report::Activities.file_name(&range),
            "activities_2024-01-01_to_2024-01-31.csv"
        );
        assert_eq!(
            Report::Wellness.file_name(&range),
            "wellness_2024-01-01_to_2024-01-31.csv"
        );
    }

    #[test]
    fn activities_come_first() {
        assert_eq!(Report::ALL[0], Report::Activities);
        assert_eq!(Report::ALL[1].endpoint(), "wellness.csv");
    }
}
