//! Cancellation signal threaded through store queries and the phase generator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, TradingHoursError};

/// A cheap, cloneable flag a consumer can use to abandon a generation in
/// flight. Checked at each store query and at each date boundary of
/// [`crate::engine::generator::PhaseGenerator`] so that dropping or
/// cancelling mid-window never forces computation of unvisited dates.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that has not been cancelled.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Signal cancellation. Visible to every clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether [`CancelToken::cancel`] has been called on this token or a clone of it.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Convenience check that returns `Err(TradingHoursError::Cancelled)` once cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TradingHoursError::Cancelled)
        } else {
            Ok(())
        }
    }
}
