//! Currency lookup and holiday listing: the same shape as
//! [`crate::models::market::Market`] but keyed by ISO currency code, with
//! no MIC mapping and no schedule of its own (spec.md notes this is
//! "trivially derived once phase generation is understood").

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::models::holiday::CurrencyHoliday;
use crate::store::{CurrencyRecord, Store};

#[derive(Clone)]
pub struct Currency {
    store: Arc<dyn Store>,
    record: CurrencyRecord,
}

impl Currency {
    fn new(store: Arc<dyn Store>, record: CurrencyRecord) -> Self {
        Currency { store, record }
    }

    pub fn currency_code(&self) -> &str {
        &self.record.currency_code
    }

    pub fn currency_name(&self) -> &str {
        &self.record.currency_name
    }

    pub fn country_code(&self) -> &str {
        &self.record.country_code
    }

    pub fn weekend_definition(&self) -> &str {
        &self.record.weekend_definition
    }

    /// Look up a currency by its ISO code. No redirection mechanism
    /// exists for currencies in the dataset.
    pub fn get(store: Arc<dyn Store>, code: &str, cancel: &CancelToken) -> Result<Option<Currency>> {
        let code = code.to_ascii_uppercase();
        Ok(store
            .currencies_by_code(&code, cancel)?
            .map(|record| Currency::new(store, record)))
    }

    pub fn list_holidays(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<CurrencyHoliday>> {
        self.store
            .holidays_for_currency(&self.record.currency_code, start, end, cancel)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency: {} {}", self.record.currency_code, self.record.currency_name)
    }
}
