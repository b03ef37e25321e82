//! The phase generation engine: the filter cascade, fallback search,
//! zoned materialization, and the orchestrating lazy generator.

pub mod fallback;
pub mod filter;
pub mod generator;
pub mod holiday_index;
pub mod materializer;
pub mod season_resolver;

pub use generator::PhaseGenerator;
