//! Error paths: malformed input, data inconsistency, and cancellation.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use trading_hours_engine::cancel::CancelToken;
use trading_hours_engine::error::TradingHoursError;
use trading_hours_engine::finid::FinId;
use trading_hours_engine::models::{Currency, Market, Schedule, Settlement, Status};
use trading_hours_engine::store::{InMemoryStore, MarketRecord, Store};
use trading_hours_engine::PhaseGenerator;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn empty_finid_is_rejected() {
    let err = FinId::parse("").unwrap_err();
    assert!(matches!(err, TradingHoursError::InvalidArgument(_)));
}

#[test]
fn finid_with_empty_segment_is_rejected() {
    let err = FinId::parse("US..NYSE").unwrap_err();
    assert!(matches!(err, TradingHoursError::InvalidArgument(_)));
}

#[test]
fn unknown_weekday_name_is_rejected_at_schedule_construction() {
    let result = Schedule::new(
        FinId::parse("US.NYSE").unwrap(),
        "Regular",
        None,
        "America/New_York",
        "Primary Trading Session",
        "Core Trading Session",
        None,
        "Funday",
        time(9, 30),
        time(16, 0),
        0,
        None,
        None,
        None,
        None,
    );
    assert!(matches!(result, Err(TradingHoursError::DataInconsistent(_))));
}

#[test]
fn offset_days_outside_range_is_rejected() {
    let result = Schedule::new(
        FinId::parse("US.NYSE").unwrap(),
        "Regular",
        None,
        "America/New_York",
        "Primary Trading Session",
        "Core Trading Session",
        None,
        "Mon-Fri",
        time(9, 30),
        time(16, 0),
        3,
        None,
        None,
        None,
        None,
    );
    assert!(matches!(result, Err(TradingHoursError::DataInconsistent(_))));
}

#[test]
fn one_sided_season_bound_is_rejected() {
    let result = Schedule::new(
        FinId::parse("US.NYSE").unwrap(),
        "Regular",
        None,
        "America/New_York",
        "Primary Trading Session",
        "Core Trading Session",
        None,
        "Mon-Fri",
        time(9, 30),
        time(16, 0),
        0,
        None,
        None,
        Some("Winter".to_string()),
        None,
    );
    assert!(matches!(result, Err(TradingHoursError::DataInconsistent(_))));
}

#[test]
fn generator_rejects_start_after_end() {
    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    let fin_id = FinId::parse("US.NYSE").unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let err = PhaseGenerator::new(store, &fin_id, start, end, CancelToken::new()).unwrap_err();
    assert!(matches!(err, TradingHoursError::InvalidArgument(_)));
}

#[test]
fn unknown_timezone_surfaces_as_data_inconsistent() {
    let store = InMemoryStore::new();
    let fin_id = FinId::parse("US.NYSE").unwrap();
    store.add_market(MarketRecord {
        fin_id: fin_id.clone(),
        exchange_name: "Test".to_string(),
        market_name: "Test".to_string(),
        security_group: None,
        timezone: "Not/A_Zone".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: None,
        acronym: "TST".to_string(),
        asset_type: None,
        memo: None,
        permanently_closed: false,
        replaced_by: None,
    });
    store.add_schedule(
        Schedule::new(
            fin_id.clone(),
            "Regular",
            None,
            "Not/A_Zone",
            "Primary Trading Session",
            "Core Trading Session",
            None,
            "Mon-Fri",
            time(9, 30),
            time(16, 0),
            0,
            None,
            None,
            None,
            None,
        )
        .unwrap(),
    );

    let market = Market::get(Arc::new(store), "US.NYSE", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(); // Monday
    let err = market
        .generate_phases(day, day, CancelToken::new())
        .unwrap()
        .collect::<trading_hours_engine::Result<Vec<_>>>()
        .unwrap_err();
    assert!(matches!(err, TradingHoursError::DataInconsistent(_)));
}

#[test]
fn missing_phase_type_surfaces_as_data_inconsistent() {
    let store = InMemoryStore::new();
    let fin_id = FinId::parse("US.NYSE").unwrap();
    store.add_market(MarketRecord {
        fin_id: fin_id.clone(),
        exchange_name: "Test".to_string(),
        market_name: "Test".to_string(),
        security_group: None,
        timezone: "UTC".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: None,
        acronym: "TST".to_string(),
        asset_type: None,
        memo: None,
        permanently_closed: false,
        replaced_by: None,
    });
    // No phase type registered for "Primary Trading Session".
    store.add_schedule(
        Schedule::new(
            fin_id.clone(),
            "Regular",
            None,
            "UTC",
            "Primary Trading Session",
            "Core Trading Session",
            None,
            "Mon-Fri",
            time(9, 30),
            time(16, 0),
            0,
            None,
            None,
            None,
            None,
        )
        .unwrap(),
    );

    let market = Market::get(Arc::new(store), "US.NYSE", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let err = market
        .generate_phases(day, day, CancelToken::new())
        .unwrap()
        .collect::<trading_hours_engine::Result<Vec<_>>>()
        .unwrap_err();
    assert!(matches!(err, TradingHoursError::DataInconsistent(_)));
}

#[test]
fn cancelled_token_short_circuits_generation() {
    let store = InMemoryStore::new();
    let fin_id = FinId::parse("US.NYSE").unwrap();
    store.add_market(MarketRecord {
        fin_id: fin_id.clone(),
        exchange_name: "Test".to_string(),
        market_name: "Test".to_string(),
        security_group: None,
        timezone: "UTC".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: None,
        acronym: "TST".to_string(),
        asset_type: None,
        memo: None,
        permanently_closed: false,
        replaced_by: None,
    });

    let market = Market::get(Arc::new(store), "US.NYSE", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let err = market.generate_phases(start, end, cancel).unwrap_err();
    assert!(matches!(err, TradingHoursError::Cancelled));
}

#[test]
fn missing_market_and_currency_are_none_not_errors() {
    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    assert!(Market::get(store.clone(), "US.NOPE", true, &CancelToken::new())
        .unwrap()
        .is_none());
    assert!(Currency::get(store, "ZZZ", &CancelToken::new()).unwrap().is_none());
}
