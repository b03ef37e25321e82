//! Phase-type reference rows: the category a concrete phase belongs to.

use std::fmt;

use crate::error::{Result, TradingHoursError};

/// Whether a phase type represents the market being open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// Parse the raw `Open`/`Closed` cell value a Store adapter would
    /// read from the reference dataset. Exposed so an implementer of a
    /// real (e.g. CSV-backed) `Store` can reuse this at its ingestion
    /// boundary instead of re-deriving the mapping.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "Open" => Ok(Status::Open),
            "Closed" => Ok(Status::Closed),
            other => Err(TradingHoursError::DataInconsistent(format!(
                "unrecognized status {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
        })
    }
}

/// Whether a phase type or holiday carries settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settlement {
    Yes,
    No,
}

impl Settlement {
    /// Parse the raw `Yes`/`No` cell value a Store adapter would read
    /// from the reference dataset. The `MarketHoliday.settlement` column
    /// also allows an empty cell (spec.md §3: `Yes/No/empty`); an adapter
    /// should map that case to `None` rather than calling this parse.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "Yes" => Ok(Settlement::Yes),
            "No" => Ok(Settlement::No),
            other => Err(TradingHoursError::DataInconsistent(format!(
                "unrecognized settlement flag {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Settlement::Yes => "Yes",
            Settlement::No => "No",
        })
    }
}

/// A phase-type reference row: the category a [`crate::models::phase::Phase`]
/// belongs to (e.g. `Primary Trading Session`, `Pre-Open`, `Intermission`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseType {
    pub name: String,
    pub status: Status,
    pub settlement: Settlement,
}

impl PhaseType {
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    pub fn has_settlement(&self) -> bool {
        self.settlement == Settlement::Yes
    }
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseType: {} {} {}", self.name, self.status, self.settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_flags_from_status_and_settlement() {
        let pt = PhaseType {
            name: "Primary Trading Session".into(),
            status: Status::Open,
            settlement: Settlement::Yes,
        };
        assert!(pt.is_open());
        assert!(pt.has_settlement());

        let pre_open = PhaseType {
            name: "Pre-Open".into(),
            status: Status::Closed,
            settlement: Settlement::No,
        };
        assert!(!pre_open.is_open());
        assert!(!pre_open.has_settlement());
    }

    #[test]
    fn parses_raw_status_and_settlement_cells() {
        assert_eq!(Status::parse("Open").unwrap(), Status::Open);
        assert_eq!(Status::parse("Closed").unwrap(), Status::Closed);
        assert!(Status::parse("open").is_err());

        assert_eq!(Settlement::parse("Yes").unwrap(), Settlement::Yes);
        assert_eq!(Settlement::parse("No").unwrap(), Settlement::No);
        assert!(Settlement::parse("maybe").is_err());
    }
}
