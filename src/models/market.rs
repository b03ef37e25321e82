//! Market lookup (FinID/MIC, with `replaced_by` redirection) and the
//! public phase-generation surface.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::cancel::CancelToken;
use crate::engine::PhaseGenerator;
use crate::error::Result;
use crate::finid::FinId;
use crate::models::holiday::MarketHoliday;
use crate::models::schedule::Schedule;
use crate::store::{MarketRecord, Store};

/// A tradable market, identified by FinID and optionally by MIC.
///
/// Holds a handle to the [`Store`] it was looked up from so that
/// [`Market::generate_phases`], [`Market::list_holidays`] and
/// [`Market::list_schedules`] can query it directly, the way the original
/// model bound itself to a module-level database handle -- made explicit
/// here instead of implicit global state.
#[derive(Clone)]
pub struct Market {
    store: Arc<dyn Store>,
    record: MarketRecord,
}

impl Market {
    fn new(store: Arc<dyn Store>, record: MarketRecord) -> Self {
        Market { store, record }
    }

    pub fn fin_id(&self) -> &FinId {
        &self.record.fin_id
    }

    pub fn mic(&self) -> Option<&str> {
        self.record.mic.as_deref()
    }

    pub fn country_code(&self) -> &str {
        self.record.fin_id.country()
    }

    pub fn exchange_name(&self) -> &str {
        &self.record.exchange_name
    }

    pub fn market_name(&self) -> &str {
        &self.record.market_name
    }

    pub fn timezone(&self) -> &str {
        &self.record.timezone
    }

    pub fn weekend_definition(&self) -> &str {
        &self.record.weekend_definition
    }

    pub fn acronym(&self) -> &str {
        &self.record.acronym
    }

    pub fn asset_type(&self) -> Option<&str> {
        self.record.asset_type.as_deref()
    }

    pub fn permanently_closed(&self) -> bool {
        self.record.permanently_closed
    }

    pub fn replaced_by(&self) -> Option<&FinId> {
        self.record.replaced_by.as_ref()
    }

    /// Look up a market by FinID, following a single `replaced_by` hop
    /// when `follow` is true. A market that redirects to itself is
    /// treated as having no redirection (never loops, never follows a
    /// second hop).
    pub fn get_by_finid(
        store: Arc<dyn Store>,
        fin_id: &FinId,
        follow: bool,
        cancel: &CancelToken,
    ) -> Result<Option<Market>> {
        let Some(record) = store.markets_by_finid(fin_id, cancel)? else {
            return Ok(None);
        };

        if follow {
            if let Some(replacement) = &record.replaced_by {
                if replacement != &record.fin_id {
                    if let Some(redirected) = store.markets_by_finid(replacement, cancel)? {
                        return Ok(Some(Market::new(store, redirected)));
                    }
                }
            }
        }

        Ok(Some(Market::new(store, record)))
    }

    /// Look up a market by MIC (case-insensitive), then apply the same
    /// single-hop redirection as [`Market::get_by_finid`].
    pub fn get_by_mic(
        store: Arc<dyn Store>,
        mic: &str,
        follow: bool,
        cancel: &CancelToken,
    ) -> Result<Option<Market>> {
        let mic = mic.to_ascii_uppercase();
        let Some(mapping) = store.mic_mapping(&mic, cancel)? else {
            return Ok(None);
        };
        Market::get_by_finid(store, &mapping.fin_id, follow, cancel)
    }

    /// Dispatches on the presence of `.` in `identifier`: dotted -> FinID
    /// path, otherwise -> MIC path.
    pub fn get(
        store: Arc<dyn Store>,
        identifier: &str,
        follow: bool,
        cancel: &CancelToken,
    ) -> Result<Option<Market>> {
        if identifier.contains('.') {
            let fin_id = FinId::parse(identifier)?;
            Market::get_by_finid(store, &fin_id, follow, cancel)
        } else {
            Market::get_by_mic(store, identifier, follow, cancel)
        }
    }

    /// Generate the lazy phase sequence for `[start, end]`.
    pub fn generate_phases(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cancel: CancelToken,
    ) -> Result<PhaseGenerator> {
        PhaseGenerator::new(self.store.clone(), &self.record.fin_id, start, end, cancel)
    }

    /// All holidays on record for this market within `[start, end]`.
    pub fn list_holidays(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<MarketHoliday>> {
        self.store
            .holidays_for_market(&self.record.fin_id, start, end, cancel)
    }

    /// All schedules on record for this market, in store order.
    pub fn list_schedules(&self, cancel: &CancelToken) -> Result<Vec<Schedule>> {
        self.store.schedules_for_market(&self.record.fin_id, cancel)
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Market: {} {} {}",
            self.record.fin_id, self.record.exchange_name, self.record.timezone
        )
    }
}
