//! Shared utilities: a memoization cache and weekday-pattern parsing.

pub mod cache;
pub mod weekday;

pub use cache::MemoCache;
pub use weekday::WeekdayPattern;
