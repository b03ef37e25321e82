//! Error types for the trading hours engine

use thiserror::Error;

/// Errors that can occur while resolving markets, schedules and phases.
///
/// Variants follow the taxonomy from the engine design: malformed caller
/// input aborts before any store access (`InvalidArgument`); a lookup that
/// is expected to succeed but doesn't indicates a gap in the reference
/// dataset (`NotFound`, `DataInconsistent`); failures from the backing
/// store are never swallowed (`StoreError`). No variant here recovers
/// silently -- data errors abort the current generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradingHoursError {
    /// Malformed identifier, unparseable date/time, or `start > end`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dataset gap that the caller cannot recover from: an unresolved
    /// season pair or a phase-type name with no matching row.
    #[error("not found: {0}")]
    NotFound(String),

    /// The dataset is internally inconsistent: a schedule references an
    /// unknown phase-type, a malformed weekday pattern, or a schedule
    /// carries only one of the two season bounds.
    #[error("data inconsistent: {0}")]
    DataInconsistent(String),

    /// Propagated unchanged from the backing store.
    #[error("store error: {0}")]
    StoreError(String),

    /// The generation was abandoned via its cancellation token.
    #[error("cancelled")]
    Cancelled,
}

/// Result type alias for trading hours engine operations.
pub type Result<T> = std::result::Result<T, TradingHoursError>;
