//! Holiday rows for markets and currencies: a dated override of the
//! regular schedule, plus its own open/closed and settlement flags.

use std::fmt;

use chrono::NaiveDate;

use crate::finid::FinId;
use crate::models::phase_type::{Settlement, Status};

/// A market holiday: a dated substitute-schedule-group selector, plus the
/// holiday's own open/closed and settlement classification (independent
/// of whatever phase types the substitute schedule group contains).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketHoliday {
    pub fin_id: FinId,
    pub date: NaiveDate,
    pub holiday_name: String,
    /// Substitute schedule-group name, e.g. `"Thanksgiving"`, `"Early Close"`, `"Regular"`.
    pub schedule: String,
    /// `None` for the dataset's empty-cell case (spec.md §3:
    /// `settlement (Yes/No/empty)`) -- distinct from an explicit `No`.
    pub settlement: Option<Settlement>,
    pub status: Status,
    pub observed: bool,
    pub memo: Option<String>,
}

impl MarketHoliday {
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn has_settlement(&self) -> bool {
        self.settlement == Some(Settlement::Yes)
    }
}

impl fmt::Display for MarketHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketHoliday: {} {} {}",
            self.fin_id, self.date, self.holiday_name
        )
    }
}

/// A currency holiday, mirroring [`MarketHoliday`] but keyed by ISO
/// currency code instead of FinID and with no substitute schedule group
/// (currencies carry no trading schedules).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyHoliday {
    pub currency_code: String,
    pub date: NaiveDate,
    pub holiday_name: String,
    /// `None` for the dataset's empty-cell case; see [`MarketHoliday::settlement`].
    pub settlement: Option<Settlement>,
    pub observed: bool,
    pub memo: Option<String>,
}

impl CurrencyHoliday {
    pub fn has_settlement(&self) -> bool {
        self.settlement == Some(Settlement::Yes)
    }
}

impl fmt::Display for CurrencyHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurrencyHoliday: {} {} {}",
            self.currency_code, self.date, self.holiday_name
        )
    }
}

/// A row with an indexable calendar date, implemented by both holiday
/// shapes so [`crate::engine::holiday_index::index_by_date`] can build
/// either index with the same machinery.
pub trait DatedRecord {
    fn record_date(&self) -> NaiveDate;
}

impl DatedRecord for MarketHoliday {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRecord for CurrencyHoliday {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}
