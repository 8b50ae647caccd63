//! Match metadata entered alongside an imported video.

use chrono::NaiveDate;

/// Date format shown to the user (dd-MM-yyyy)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Home team, away team and date of the recorded game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMetadata {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
}

impl GameMetadata {
    /// Create empty metadata for a game played on `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            home_team: String::new(),
            away_team: String::new(),
            date,
        }
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// One-line summary, e.g. `Lions (home) vs Tigers (away) on 03-05-2025`
    pub fn describe(&self) -> String {
        format!(
            "{} (home) vs {} (away) on {}",
            self.home_team,
            self.away_team,
            self.formatted_date()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_describe() {
        let mut metadata = GameMetadata::new(date(2025, 5, 3));
        metadata.home_team = "Lions".into();
        metadata.away_team = "Tigers".into();
        assert_eq!(metadata.describe(), "Lions (home) vs Tigers (away) on 03-05-2025");
    }

    #[test]
    fn test_describe_empty_teams() {
        let metadata = GameMetadata::new(date(2024, 12, 31));
        assert_eq!(metadata.describe(), " (home) vs  (away) on 31-12-2024");
    }
}
