//! FinID identifiers: dotted market paths such as `US.NYSE` or
//! `ZA.JSE.EQUITIES.DRV`.

use std::fmt;

use crate::error::{Result, TradingHoursError};

/// A TradingHours market identifier of the form `COUNTRY.ACRONYM[.SUBMARKET]`.
///
/// The first dotted segment is always the ISO country code. FinIDs compare
/// and hash by their full dotted string, so `FinId` is cheap to use as a
/// map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinId(String);

impl FinId {
    /// Parse a dotted FinID string, rejecting empty segments.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || raw.split('.').any(str::is_empty) {
            return Err(TradingHoursError::InvalidArgument(format!(
                "malformed FinID: {raw:?}"
            )));
        }
        Ok(FinId(raw.to_string()))
    }

    /// The ISO country code: the first dotted segment.
    pub fn country(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// The full dotted path as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
