//! Recovery path when a holiday's substitute schedule group has no
//! weekday-matching schedule: walk weekdays backward within the same
//! post-season-filter set until one matches.

use chrono::Weekday;

use crate::models::schedule::Schedule;

fn previous_weekday(weekday: Weekday) -> Weekday {
    weekday.pred()
}

/// Starting from `today_weekday - 1`, walk backward through weekdays,
/// filtering `before_weekdays` (the stage-1..4 survivors, before the
/// weekday filter) against each candidate weekday. Returns the first
/// non-empty match, or an empty vec if the full week is exhausted
/// without one -- at most 7 iterations, since the loop stops once it
/// returns to `today_weekday`.
pub fn select_fallback<'a>(before_weekdays: &[&'a Schedule], today_weekday: Weekday) -> Vec<&'a Schedule> {
    let mut candidate = previous_weekday(today_weekday);
    while candidate != today_weekday {
        let matches: Vec<&Schedule> = before_weekdays
            .iter()
            .copied()
            .filter(|s| s.days_pattern.matches(candidate))
            .collect();
        if !matches.is_empty() {
            return matches;
        }
        candidate = previous_weekday(candidate);
    }
    Vec::new()
}
