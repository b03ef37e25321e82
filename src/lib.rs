//! # Trading Hours Engine
//!
//! A phase generation engine for global market trading hours reference
//! data: given a market and a date range, it selects the correct schedule
//! records from a potentially conflicting set -- accounting for
//! holidays, seasonal schedules, day-of-week rules, and in-force date
//! ranges -- and materializes them into zoned wall-clock
//! [`Phase`](crate::models::Phase) intervals.
//!
//! ## What this crate is not
//!
//! It is not a CSV/ingestion pipeline, not the relational query layer
//! that would back a real deployment, and not a CLI. Those are expected
//! to sit in front of the [`Store`](crate::store::Store) trait this
//! engine is coded against. [`store::InMemoryStore`] is a concrete,
//! in-memory adapter good enough to exercise the algorithm in tests and
//! benches.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{NaiveDate, NaiveTime};
//! use trading_hours_engine::finid::FinId;
//! use trading_hours_engine::models::{Market, PhaseType, Schedule, Settlement, Status};
//! use trading_hours_engine::store::{InMemoryStore, MarketRecord, Store};
//! use trading_hours_engine::cancel::CancelToken;
//!
//! fn main() -> trading_hours_engine::Result<()> {
//!     let store = InMemoryStore::new();
//!     let fin_id = FinId::parse("US.NYSE")?;
//!
//!     store.add_market(MarketRecord {
//!         fin_id: fin_id.clone(),
//!         exchange_name: "New York Stock Exchange".to_string(),
//!         market_name: "New York Stock Exchange".to_string(),
//!         security_group: None,
//!         timezone: "America/New_York".to_string(),
//!         weekend_definition: "Sat-Sun".to_string(),
//!         mic: Some("XNYS".to_string()),
//!         acronym: "NYSE".to_string(),
//!         asset_type: None,
//!         memo: None,
//!         permanently_closed: false,
//!         replaced_by: None,
//!     });
//!     store.add_phase_type(PhaseType {
//!         name: "Primary Trading Session".to_string(),
//!         status: Status::Open,
//!         settlement: Settlement::Yes,
//!     });
//!     store.add_schedule(Schedule::new(
//!         fin_id.clone(),
//!         "Regular",
//!         None,
//!         "America/New_York",
//!         "Primary Trading Session",
//!         "Core Trading Session",
//!         None,
//!         "Mon-Fri",
//!         NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
//!         NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
//!         0,
//!         None,
//!         None,
//!         None,
//!         None,
//!     )?);
//!
//!     let store: Arc<dyn Store> = Arc::new(store);
//!     let cancel = CancelToken::new();
//!     let market = Market::get(store, "US.NYSE", true, &cancel)?.expect("market exists");
//!
//!     let day = NaiveDate::from_ymd_opt(2024, 2, 6).unwrap();
//!     let phases: Vec<_> = market
//!         .generate_phases(day, day, cancel)?
//!         .collect::<trading_hours_engine::Result<Vec<_>>>()?;
//!
//!     assert_eq!(phases[0].phase_name, "Core Trading Session");
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! [`cancel::CancelToken`] is threaded through every store query and
//! through the generator's per-date loop, so a consumer that drops the
//! iterator or calls [`cancel::CancelToken::cancel`] mid-window never
//! forces computation of dates it never asked to see.
//!
//! ## Error handling
//!
//! ```rust
//! use trading_hours_engine::TradingHoursError;
//!
//! match trading_hours_engine::finid::FinId::parse("") {
//!     Ok(_) => unreachable!(),
//!     Err(TradingHoursError::InvalidArgument(_)) => println!("rejected malformed FinID"),
//!     Err(e) => eprintln!("unexpected error: {e}"),
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE))
//! - MIT license ([LICENSE-MIT](LICENSE-MIT))
//!
//! at your option.

#![deny(unsafe_code)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod engine;
pub mod error;
pub mod finid;
pub mod models;
pub mod store;
pub mod utils;

pub use cancel::CancelToken;
pub use engine::PhaseGenerator;
pub use error::{Result, TradingHoursError};
pub use finid::FinId;
pub use models::{Currency, Market};

// Re-export chrono types for convenience, matching how callers already
// talk about dates and times when building a `Store`.
pub use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
