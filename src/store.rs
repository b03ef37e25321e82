//! The read-only row store the engine queries.
//!
//! `Store` is the seam between the phase generation algorithm and the
//! reference dataset. Ingestion (CSV loading, the relational query layer)
//! stays out of scope per the engine design; this module defines the
//! contract a real ingestion layer would implement, plus an in-memory
//! adapter (backed by `dashmap` for safe concurrent readers) that this
//! crate's tests and benches run the algorithm against.

use chrono::NaiveDate;
use dashmap::DashMap;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::finid::FinId;
use crate::models::holiday::{CurrencyHoliday, MarketHoliday};
use crate::models::phase_type::PhaseType;
use crate::models::schedule::Schedule;
use crate::models::season::SeasonDefinition;

/// One row of the `markets` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRecord {
    pub fin_id: FinId,
    pub exchange_name: String,
    pub market_name: String,
    pub security_group: Option<String>,
    pub timezone: String,
    pub weekend_definition: String,
    pub mic: Option<String>,
    pub acronym: String,
    pub asset_type: Option<String>,
    pub memo: Option<String>,
    pub permanently_closed: bool,
    pub replaced_by: Option<FinId>,
}

/// One row of the `markets` table's MIC alias table (`mic_mappings`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicMappingRecord {
    pub mic: String,
    pub fin_id: FinId,
}

/// One row of the `currencies` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub currency_code: String,
    pub currency_name: String,
    pub country_code: String,
    pub central_bank: Option<String>,
    pub financial_capital: Option<String>,
    pub financial_capital_timezone: Option<String>,
    pub weekend_definition: String,
}

/// Read-only access to the reference dataset: `markets`, `schedules`,
/// `market_holidays`, `season_definitions`, `phase_types`, `mic_mappings`,
/// and (the supplemented table) `currencies` / `currency_holidays`.
///
/// Every method accepts a [`CancelToken`] so a caller abandoning a
/// generation mid-window releases any store-side resources (open
/// cursors, pending requests) promptly; implementations backed by real
/// I/O should check it before and/or during a fetch. Implementors must be
/// safe for concurrent readers -- the engine holds no locks of its own.
pub trait Store: Send + Sync {
    fn markets_by_finid(&self, fin_id: &FinId, cancel: &CancelToken) -> Result<Option<MarketRecord>>;
    fn markets_by_mic(&self, mic: &str, cancel: &CancelToken) -> Result<Option<MarketRecord>>;
    fn schedules_for_market(&self, fin_id: &FinId, cancel: &CancelToken) -> Result<Vec<Schedule>>;
    fn holidays_for_market(
        &self,
        fin_id: &FinId,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<MarketHoliday>>;
    fn season(&self, name: &str, year: i32, cancel: &CancelToken) -> Result<Option<SeasonDefinition>>;
    fn phase_types_all(&self, cancel: &CancelToken) -> Result<Vec<PhaseType>>;
    fn mic_mapping(&self, mic: &str, cancel: &CancelToken) -> Result<Option<MicMappingRecord>>;

    fn currencies_by_code(&self, code: &str, cancel: &CancelToken) -> Result<Option<CurrencyRecord>>;
    fn holidays_for_currency(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<CurrencyHoliday>>;
}

/// An in-memory [`Store`] built from plain rows, e.g. assembled by a test
/// fixture or a caller's own ingestion step. Not the CSV/ingestion layer
/// itself -- just the seam the engine is coded against, made concrete
/// enough to run and test.
#[derive(Default)]
pub struct InMemoryStore {
    markets: DashMap<String, MarketRecord>,
    mic_mappings: DashMap<String, MicMappingRecord>,
    schedules: DashMap<String, Vec<Schedule>>,
    holidays: DashMap<String, Vec<MarketHoliday>>,
    seasons: DashMap<(String, i32), SeasonDefinition>,
    phase_types: DashMap<String, PhaseType>,
    currencies: DashMap<String, CurrencyRecord>,
    currency_holidays: DashMap<String, Vec<CurrencyHoliday>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_market(&self, record: MarketRecord) {
        self.markets.insert(record.fin_id.as_str().to_string(), record);
    }

    pub fn add_mic_mapping(&self, record: MicMappingRecord) {
        self.mic_mappings
            .insert(record.mic.to_ascii_uppercase(), record);
    }

    pub fn add_schedule(&self, schedule: Schedule) {
        self.schedules
            .entry(schedule.fin_id.as_str().to_string())
            .or_default()
            .push(schedule);
    }

    pub fn add_holiday(&self, holiday: MarketHoliday) {
        self.holidays
            .entry(holiday.fin_id.as_str().to_string())
            .or_default()
            .push(holiday);
    }

    pub fn add_season(&self, season: SeasonDefinition) {
        self.seasons
            .insert((season.season_name.clone(), season.year), season);
    }

    pub fn add_phase_type(&self, phase_type: PhaseType) {
        self.phase_types.insert(phase_type.name.clone(), phase_type);
    }

    pub fn add_currency(&self, record: CurrencyRecord) {
        self.currencies.insert(record.currency_code.clone(), record);
    }

    pub fn add_currency_holiday(&self, holiday: CurrencyHoliday) {
        self.currency_holidays
            .entry(holiday.currency_code.clone())
            .or_default()
            .push(holiday);
    }
}

impl Store for InMemoryStore {
    fn markets_by_finid(&self, fin_id: &FinId, cancel: &CancelToken) -> Result<Option<MarketRecord>> {
        cancel.check()?;
        Ok(self.markets.get(fin_id.as_str()).map(|r| r.clone()))
    }

    fn markets_by_mic(&self, mic: &str, cancel: &CancelToken) -> Result<Option<MarketRecord>> {
        cancel.check()?;
        let Some(mapping) = self.mic_mapping(mic, cancel)? else {
            return Ok(None);
        };
        self.markets_by_finid(&mapping.fin_id, cancel)
    }

    fn schedules_for_market(&self, fin_id: &FinId, cancel: &CancelToken) -> Result<Vec<Schedule>> {
        cancel.check()?;
        Ok(self
            .schedules
            .get(fin_id.as_str())
            .map(|r| r.clone())
            .unwrap_or_default())
    }

    fn holidays_for_market(
        &self,
        fin_id: &FinId,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<MarketHoliday>> {
        cancel.check()?;
        Ok(self
            .holidays
            .get(fin_id.as_str())
            .map(|rows| {
                rows.iter()
                    .filter(|h| h.date >= start && h.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn season(&self, name: &str, year: i32, cancel: &CancelToken) -> Result<Option<SeasonDefinition>> {
        cancel.check()?;
        Ok(self.seasons.get(&(name.to_string(), year)).map(|r| r.clone()))
    }

    fn phase_types_all(&self, cancel: &CancelToken) -> Result<Vec<PhaseType>> {
        cancel.check()?;
        Ok(self.phase_types.iter().map(|r| r.clone()).collect())
    }

    fn mic_mapping(&self, mic: &str, cancel: &CancelToken) -> Result<Option<MicMappingRecord>> {
        cancel.check()?;
        Ok(self.mic_mappings.get(&mic.to_ascii_uppercase()).map(|r| r.clone()))
    }

    fn currencies_by_code(&self, code: &str, cancel: &CancelToken) -> Result<Option<CurrencyRecord>> {
        cancel.check()?;
        Ok(self.currencies.get(code).map(|r| r.clone()))
    }

    fn holidays_for_currency(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<CurrencyHoliday>> {
        cancel.check()?;
        Ok(self
            .currency_holidays
            .get(code)
            .map(|rows| {
                rows.iter()
                    .filter(|h| h.date >= start && h.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
