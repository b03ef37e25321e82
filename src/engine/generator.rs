//! Orchestrates the per-date loop, offset-day lookback, ordering, and
//! window clipping; emits phases as a plain pull-based iterator.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};

use crate::cancel::CancelToken;
use crate::engine::fallback::select_fallback;
use crate::engine::filter::{
    compute_group_open, filter_group, filter_in_force, filter_season, filter_weekday,
    pick_schedule_group,
};
use crate::engine::materializer::materialize;
use crate::engine::season_resolver::SeasonResolver;
use crate::error::{Result, TradingHoursError};
use crate::finid::FinId;
use crate::models::holiday::MarketHoliday;
use crate::models::phase::Phase;
use crate::models::phase_type::PhaseType;
use crate::models::schedule::{Schedule, MAX_OFFSET_DAYS};
use crate::store::Store;

use super::holiday_index::index_by_date;

/// A lazy, pull-based sequence of [`Phase`]s for one market over
/// `[start, end]`. Store fetches (schedules, holidays, phase types)
/// happen eagerly at construction; per-date filtering and materializing
/// happen lazily as the iterator is driven, so a consumer that stops
/// early never forces computation of unvisited dates.
pub struct PhaseGenerator {
    window_start: NaiveDate,
    end: NaiveDate,
    current_date: NaiveDate,
    all_schedules: Vec<Schedule>,
    holiday_index: HashMap<NaiveDate, MarketHoliday>,
    group_open: HashMap<String, bool>,
    phase_types: HashMap<String, PhaseType>,
    season_resolver: SeasonResolver,
    cancel: CancelToken,
    pending: VecDeque<Phase>,
    finished: bool,
}

impl PhaseGenerator {
    pub fn new(
        store: Arc<dyn Store>,
        fin_id: &FinId,
        start: NaiveDate,
        end: NaiveDate,
        cancel: CancelToken,
    ) -> Result<Self> {
        if start > end {
            return Err(TradingHoursError::InvalidArgument(format!(
                "start {start} is after end {end}"
            )));
        }

        let offset_start = start - Duration::days(MAX_OFFSET_DAYS);

        let mut all_schedules = store.schedules_for_market(fin_id, &cancel)?;
        sort_schedules(&mut all_schedules);

        let holiday_rows = store.holidays_for_market(fin_id, offset_start, end, &cancel)?;
        let holiday_index = index_by_date(holiday_rows);

        let phase_types: HashMap<String, PhaseType> = store
            .phase_types_all(&cancel)?
            .into_iter()
            .map(|pt| (pt.name.clone(), pt))
            .collect();

        let group_open = compute_group_open(&all_schedules, &phase_types);
        let season_resolver = SeasonResolver::new(store);

        Ok(PhaseGenerator {
            window_start: start,
            end,
            current_date: offset_start,
            all_schedules,
            holiday_index,
            group_open,
            phase_types,
            season_resolver,
            cancel,
            pending: VecDeque::new(),
            finished: false,
        })
    }

    /// Run stages 1-5 (plus fallback) for a single date and materialize
    /// the survivors, sorted by `(start_time, duration)`.
    fn phases_for_date(&self, date: NaiveDate) -> Result<Vec<Phase>> {
        self.cancel.check()?;
        let weekday = date.weekday();

        let (target_group, fallback_allowed) =
            pick_schedule_group(date, &self.holiday_index, &self.group_open);

        let grouped = filter_group(&target_group, &self.all_schedules);
        let in_force = filter_in_force(date, grouped);
        let before_weekdays = filter_season(date, in_force, &self.season_resolver, &self.cancel)?;

        let mut survivors = filter_weekday(weekday, &before_weekdays);
        if survivors.is_empty() && fallback_allowed {
            survivors = select_fallback(&before_weekdays, weekday);
        }

        survivors.sort_by_key(|s| (s.start, s.duration()));

        let mut phases = Vec::with_capacity(survivors.len());
        for schedule in survivors {
            if let Some(phase) = materialize(schedule, date, self.window_start, &self.phase_types)? {
                phases.push(phase);
            }
        }
        Ok(phases)
    }
}

fn sort_schedules(schedules: &mut [Schedule]) {
    schedules.sort_by(|a, b| {
        (
            a.schedule_group.to_ascii_lowercase(),
            a.in_force_start_date,
            a.season_start.clone(),
            a.start,
            a.end,
        )
            .cmp(&(
                b.schedule_group.to_ascii_lowercase(),
                b.in_force_start_date,
                b.season_start.clone(),
                b.start,
                b.end,
            ))
    });
}

impl Iterator for PhaseGenerator {
    type Item = Result<Phase>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(phase) = self.pending.pop_front() {
                return Some(Ok(phase));
            }

            if self.finished || self.current_date > self.end {
                self.finished = true;
                return None;
            }

            match self.phases_for_date(self.current_date) {
                Ok(phases) => {
                    self.pending.extend(phases);
                    self.current_date += Duration::days(1);
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
