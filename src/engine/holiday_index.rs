//! Indexes holiday rows by date for fast per-date lookup during generation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::holiday::DatedRecord;

/// Index a set of rows by their date. If more than one row shares a date
/// (the dataset can carry two holiday records for the same market/date,
/// e.g. distinct settlement semantics), the last one encountered wins.
/// This mirrors the reference implementation exactly; which record "should"
/// win is an open question upstream, not one this engine re-adjudicates.
pub fn index_by_date<T: DatedRecord>(records: Vec<T>) -> HashMap<NaiveDate, T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.insert(record.record_date(), record);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finid::FinId;
    use crate::models::holiday::MarketHoliday;
    use crate::models::phase_type::{Settlement, Status};

    fn holiday(date: NaiveDate, settlement: Option<Settlement>, status: Status) -> MarketHoliday {
        MarketHoliday {
            fin_id: FinId::parse("US.NYSE").unwrap(),
            date,
            holiday_name: "Thanksgiving Day".to_string(),
            schedule: "Thanksgiving".to_string(),
            settlement,
            status,
            observed: false,
            memo: None,
        }
    }

    #[test]
    fn last_duplicate_wins() {
        let date = NaiveDate::from_ymd_opt(2007, 11, 22).unwrap();
        let rows = vec![
            holiday(date, Some(Settlement::No), Status::Closed),
            holiday(date, Some(Settlement::Yes), Status::Open),
        ];
        let index = index_by_date(rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&date].settlement, Some(Settlement::Yes));
    }
}
