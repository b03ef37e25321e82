//! Resolves a `(season_name, year)` pair to a concrete date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::cancel::CancelToken;
use crate::error::{Result, TradingHoursError};
use crate::store::Store;
use crate::utils::MemoCache;

/// Pure lookup into the season definitions table, memoized per
/// `(season_name, year)` the way [`crate::utils::cache::MemoCache`]
/// memoizes any other keyed computation -- a season pair is immutable
/// reference data, so once resolved it never needs re-fetching within a
/// generation.
pub struct SeasonResolver {
    store: Arc<dyn Store>,
    cache: MemoCache<(String, i32), NaiveDate>,
}

impl SeasonResolver {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            cache: MemoCache::with_capacity(256),
        }
    }

    /// Resolve `(season_name, year)` to its concrete date. Fails with
    /// `NotFound` if the dataset has no row for the pair -- there is no
    /// fuzzy matching or interpolation.
    pub fn resolve(&self, season_name: &str, year: i32, cancel: &CancelToken) -> Result<NaiveDate> {
        self.cache.get_or_try_compute((season_name.to_string(), year), || {
            self.store
                .season(season_name, year, cancel)?
                .map(|definition| definition.date)
                .ok_or_else(|| {
                    TradingHoursError::NotFound(format!(
                        "no season definition for {season_name:?} in {year}"
                    ))
                })
        })
    }
}
