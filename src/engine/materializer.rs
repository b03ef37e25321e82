//! Combines a surviving schedule with a calendar date into a zoned
//! [`Phase`], or drops it if it ends before the requested window starts.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Duration, LocalResult, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, TradingHoursError};
use crate::models::phase::Phase;
use crate::models::phase_type::PhaseType;
use crate::models::schedule::Schedule;

/// Attach `schedule`'s IANA timezone to a local naive datetime, resolving
/// DST edge cases with an explicit, documented policy: an ambiguous
/// (fold) local time resolves to the **earliest** offset; a nonexistent
/// (gap) local time is **shifted forward** to the first valid instant.
fn localize(tz: Tz, naive: chrono::NaiveDateTime) -> chrono::DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _latest) => earliest,
        LocalResult::None => {
            // Walk forward in small steps until the local time exists again.
            // Gaps from DST "spring forward" are at most a few hours wide.
            let mut probe = naive;
            loop {
                probe += Duration::minutes(1);
                if let LocalResult::Single(dt) = tz.from_local_datetime(&probe) {
                    break dt;
                }
            }
        }
    }
}

/// Materialize `schedule` for `today`, dropping it if its end date lies
/// entirely before `window_start` (lookback pruning).
pub fn materialize(
    schedule: &Schedule,
    today: NaiveDate,
    window_start: NaiveDate,
    phase_types: &HashMap<String, PhaseType>,
) -> Result<Option<Phase>> {
    let end_date = today + Duration::days(schedule.offset_days);
    if end_date < window_start {
        return Ok(None);
    }

    let tz = Tz::from_str(&schedule.timezone).map_err(|_| {
        TradingHoursError::DataInconsistent(format!("unknown timezone {:?}", schedule.timezone))
    })?;

    let local_start = today.and_time(schedule.start);
    let local_end = end_date.and_time(schedule.end);

    let start = localize(tz, local_start);
    let end = localize(tz, local_end);

    let phase_type = phase_types.get(&schedule.phase_type).ok_or_else(|| {
        TradingHoursError::DataInconsistent(format!(
            "schedule references unknown phase type {:?}",
            schedule.phase_type
        ))
    })?;

    Ok(Some(Phase {
        phase_type: schedule.phase_type.clone(),
        phase_name: schedule.phase_name.clone(),
        phase_memo: schedule.phase_memo.clone(),
        status: phase_type.status,
        settlement: phase_type.settlement,
        start,
        end,
    }))
}
