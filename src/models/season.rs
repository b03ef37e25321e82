//! Season definitions: named dates that vary by year, used as schedule
//! validity bounds (e.g. `"First day of March"`).

use std::fmt;

use chrono::NaiveDate;

/// One materialized `(season_name, year) -> date` row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonDefinition {
    pub season_name: String,
    pub year: i32,
    pub date: NaiveDate,
}

impl fmt::Display for SeasonDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeasonDefinition: {} {}", self.date, self.season_name)
    }
}
