//! The stateless schedule-selection cascade: group -> in-force -> season -> weekday.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::cancel::CancelToken;
use crate::engine::season_resolver::SeasonResolver;
use crate::error::Result;
use crate::models::holiday::MarketHoliday;
use crate::models::phase_type::PhaseType;
use crate::models::schedule::Schedule;

/// `"regular"` unless today is a holiday, in which case the holiday's
/// substitute group (lowercased). `fallback_allowed` is true only when
/// that substitute group is classified "open" (see
/// [`compute_group_open`]).
pub fn pick_schedule_group(
    today: NaiveDate,
    holidays: &HashMap<NaiveDate, MarketHoliday>,
    group_open: &HashMap<String, bool>,
) -> (String, bool) {
    match holidays.get(&today) {
        Some(holiday) => {
            let group = holiday.schedule.to_ascii_lowercase();
            let fallback = group_open.get(&group).copied().unwrap_or(false);
            (group, fallback)
        }
        None => ("regular".to_string(), false),
    }
}

/// Precompute, once per market, whether each schedule group is "open":
/// true iff at least one of its schedules references a phase type whose
/// status is Open.
pub fn compute_group_open(
    schedules: &[Schedule],
    phase_types: &HashMap<String, PhaseType>,
) -> HashMap<String, bool> {
    let mut group_open: HashMap<String, bool> = HashMap::new();
    for schedule in schedules {
        let group = schedule.schedule_group.to_ascii_lowercase();
        let is_open = phase_types
            .get(&schedule.phase_type)
            .map(|pt| pt.is_open())
            .unwrap_or(false);
        let entry = group_open.entry(group).or_insert(false);
        *entry = *entry || is_open;
    }
    group_open
}

/// Stage 2: keep schedules whose `schedule_group` matches `target_group`
/// case-insensitively.
pub fn filter_group<'a>(target_group: &str, schedules: &'a [Schedule]) -> Vec<&'a Schedule> {
    schedules
        .iter()
        .filter(|s| s.schedule_group.eq_ignore_ascii_case(target_group))
        .collect()
}

/// Stage 3: keep schedules in force on `date`.
pub fn filter_in_force<'a>(date: NaiveDate, schedules: Vec<&'a Schedule>) -> Vec<&'a Schedule> {
    schedules.into_iter().filter(|s| s.is_in_force(date)).collect()
}

/// Stage 4: keep non-seasonal schedules unconditionally; keep seasonal
/// schedules whose resolved season window (using `date`'s year)
/// contains `date`, handling wrap-around across a year boundary.
pub fn filter_season<'a>(
    date: NaiveDate,
    schedules: Vec<&'a Schedule>,
    resolver: &SeasonResolver,
    cancel: &CancelToken,
) -> Result<Vec<&'a Schedule>> {
    let mut kept = Vec::with_capacity(schedules.len());
    for schedule in schedules {
        if !schedule.has_season() {
            kept.push(schedule);
            continue;
        }

        // Invariant 1 (enforced at construction): both bounds are present
        // whenever either is.
        let start_name = schedule.season_start.as_deref().unwrap();
        let end_name = schedule.season_end.as_deref().unwrap();
        let start_date = resolver.resolve(start_name, date.year(), cancel)?;
        let end_date = resolver.resolve(end_name, date.year(), cancel)?;

        let in_window = if end_date < start_date {
            date <= end_date || date >= start_date
        } else {
            date >= start_date && date <= end_date
        };

        if in_window {
            kept.push(schedule);
        }
    }
    Ok(kept)
}

/// Stage 5: keep schedules whose `days` pattern matches `weekday`.
pub fn filter_weekday<'a>(weekday: Weekday, schedules: &[&'a Schedule]) -> Vec<&'a Schedule> {
    schedules
        .iter()
        .copied()
        .filter(|s| s.days_pattern.matches(weekday))
        .collect()
}
