//! Explicit, typed record types -- one per reference-dataset table --
//! replacing the dynamic attribute facade the original source exposes.

pub mod currency;
pub mod holiday;
pub mod market;
pub mod phase;
pub mod phase_type;
pub mod schedule;
pub mod season;

pub use currency::Currency;
pub use holiday::{CurrencyHoliday, MarketHoliday};
pub use market::Market;
pub use phase::Phase;
pub use phase_type::{PhaseType, Settlement, Status};
pub use schedule::Schedule;
pub use season::SeasonDefinition;
