//! Schedule rows: the individual sessions that, filtered and combined with
//! a date, become concrete [`crate::models::phase::Phase`]s.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{Result, TradingHoursError};
use crate::finid::FinId;
use crate::utils::WeekdayPattern;

/// Maximum number of days a schedule's end may lie after its start date.
pub const MAX_OFFSET_DAYS: i64 = 2;

/// A single named session belonging to a schedule group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub fin_id: FinId,
    pub schedule_group: String,
    pub schedule_group_memo: Option<String>,
    pub timezone: String,
    pub phase_type: String,
    pub phase_name: String,
    pub phase_memo: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) days_pattern: WeekdayPattern,
    pub days: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub offset_days: i64,
    pub in_force_start_date: Option<NaiveDate>,
    pub in_force_end_date: Option<NaiveDate>,
    pub season_start: Option<String>,
    pub season_end: Option<String>,
}

impl Schedule {
    /// Build a schedule, validating the weekday pattern, the offset-day
    /// bound, and that season bounds are either both present or both
    /// absent (spec invariant 1).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fin_id: FinId,
        schedule_group: impl Into<String>,
        schedule_group_memo: Option<String>,
        timezone: impl Into<String>,
        phase_type: impl Into<String>,
        phase_name: impl Into<String>,
        phase_memo: Option<String>,
        days: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        offset_days: i64,
        in_force_start_date: Option<NaiveDate>,
        in_force_end_date: Option<NaiveDate>,
        season_start: Option<String>,
        season_end: Option<String>,
    ) -> Result<Self> {
        let days = days.into();
        let days_pattern = WeekdayPattern::parse(&days)?;

        if !(0..=MAX_OFFSET_DAYS).contains(&offset_days) {
            return Err(TradingHoursError::DataInconsistent(format!(
                "offset_days {offset_days} out of range [0, {MAX_OFFSET_DAYS}]"
            )));
        }

        if season_start.is_some() != season_end.is_some() {
            return Err(TradingHoursError::DataInconsistent(format!(
                "schedule for {fin_id} has only one of season_start/season_end"
            )));
        }

        Ok(Schedule {
            fin_id,
            schedule_group: schedule_group.into(),
            schedule_group_memo,
            timezone: timezone.into(),
            phase_type: phase_type.into(),
            phase_name: phase_name.into(),
            phase_memo,
            days_pattern,
            days,
            start,
            end,
            offset_days,
            in_force_start_date,
            in_force_end_date,
            season_start,
            season_end,
        })
    }

    /// Whether this schedule carries a season restriction at all.
    pub fn has_season(&self) -> bool {
        self.season_start.is_some()
    }

    /// Whether `date` falls within `[in_force_start_date, in_force_end_date]`,
    /// treating a missing bound as unbounded.
    pub fn is_in_force(&self, date: NaiveDate) -> bool {
        let after_start = self.in_force_start_date.map_or(true, |start| start <= date);
        let before_end = self.in_force_end_date.map_or(true, |end| date <= end);
        after_start && before_end
    }

    /// Wall-clock duration of the session, accounting for `offset_days`.
    pub fn duration(&self) -> Duration {
        use chrono::Timelike;
        let start = Duration::seconds(self.start.num_seconds_from_midnight() as i64);
        let end = Duration::days(self.offset_days)
            + Duration::seconds(self.end.num_seconds_from_midnight() as i64);
        end - start
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schedule: {} {} - {} {} {}",
            self.fin_id,
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S"),
            self.days,
            self.schedule_group
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample(offset_days: i64) -> Result<Schedule> {
        Schedule::new(
            FinId::parse("US.NYSE").unwrap(),
            "Regular",
            None,
            "America/New_York",
            "Primary Trading Session",
            "Core Trading Session",
            None,
            "Mon-Fri",
            time(9, 30),
            time(16, 0),
            offset_days,
            None,
            None,
            None,
            None,
        )
    }

    #[test]
    fn rejects_offset_days_out_of_range() {
        assert!(sample(3).is_err());
        assert!(sample(-1).is_err());
        assert!(sample(2).is_ok());
    }

    #[test]
    fn rejects_mismatched_season_bounds() {
        let result = Schedule::new(
            FinId::parse("US.NYSE").unwrap(),
            "Regular",
            None,
            "America/New_York",
            "Primary Trading Session",
            "Core Trading Session",
            None,
            "Mon-Fri",
            time(9, 30),
            time(16, 0),
            0,
            None,
            None,
            Some("Winter".to_string()),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn in_force_bounds_treat_missing_as_unbounded() {
        let mut schedule = sample(0).unwrap();
        schedule.in_force_start_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        schedule.in_force_end_date = NaiveDate::from_ymd_opt(2024, 12, 31);

        assert!(schedule.is_in_force(NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()));
        assert!(!schedule.is_in_force(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));

        schedule.in_force_start_date = None;
        schedule.in_force_end_date = None;
        assert!(schedule.is_in_force(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
    }

    #[test]
    fn display_matches_reference_format() {
        let schedule = Schedule::new(
            FinId::parse("US.NYSE").unwrap(),
            "Regular",
            None,
            "America/New_York",
            "Pre-Trading Session",
            "Pre-Trading Session",
            None,
            "Mon-Fri",
            time(4, 0),
            time(9, 30),
            0,
            None,
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            schedule.to_string(),
            "Schedule: US.NYSE 04:00:00 - 09:30:00 Mon-Fri Regular"
        );
    }
}
