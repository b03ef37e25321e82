//! The output of phase generation: a single concrete trading interval in
//! zoned wall-clock time.

use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::models::phase_type::{Settlement, Status};

/// A single concrete trading interval, materialized from a surviving
/// [`crate::models::schedule::Schedule`] for one calendar date.
///
/// `end` is always strictly after `start`; a phase may straddle local
/// midnight when the originating schedule's `offset_days > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    pub phase_type: String,
    pub phase_name: String,
    pub phase_memo: Option<String>,
    pub status: Status,
    pub settlement: Settlement,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl Phase {
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn has_settlement(&self) -> bool {
        self.settlement == Settlement::Yes
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConcretePhase: {} - {} {}",
            self.start.format("%Y-%m-%d %H:%M:%S%:z"),
            self.end.format("%Y-%m-%d %H:%M:%S%:z"),
            self.phase_name
        )
    }
}
