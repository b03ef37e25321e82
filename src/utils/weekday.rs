//! Parsing and matching for `Schedule.days` weekday patterns.
//!
//! Patterns are a comma-separated list whose elements are three-letter
//! day names (`Mon` .. `Sun`) or hyphenated ranges of them (`Mon-Fri`).
//! Ranges wrap: `Fri-Mon` means {Fri, Sat, Sun, Mon}.

use chrono::Weekday;

use crate::error::{Result, TradingHoursError};

/// A parsed `days` pattern, represented as the set of weekdays it matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekdayPattern {
    mask: [bool; 7],
}

impl WeekdayPattern {
    /// Parse a pattern such as `"Mon-Fri"`, `"Sat"`, or `"Mon,Wed,Fri"`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut mask = [false; 7];
        for element in raw.split(',') {
            let element = element.trim();
            if element.is_empty() {
                return Err(TradingHoursError::DataInconsistent(format!(
                    "empty weekday element in pattern {raw:?}"
                )));
            }
            match element.split_once('-') {
                Some((from, to)) => {
                    let from = parse_day(from, raw)?;
                    let to = parse_day(to, raw)?;
                    mark_range(&mut mask, from, to);
                }
                None => {
                    let day = parse_day(element, raw)?;
                    mask[index_of(day)] = true;
                }
            }
        }
        Ok(WeekdayPattern { mask })
    }

    /// Whether this pattern matches the given weekday.
    pub fn matches(&self, weekday: Weekday) -> bool {
        self.mask[index_of(weekday)]
    }
}

fn index_of(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

fn parse_day(token: &str, original: &str) -> Result<Weekday> {
    match token.trim().to_ascii_lowercase().as_str() {
        "mon" => Ok(Weekday::Mon),
        "tue" => Ok(Weekday::Tue),
        "wed" => Ok(Weekday::Wed),
        "thu" => Ok(Weekday::Thu),
        "fri" => Ok(Weekday::Fri),
        "sat" => Ok(Weekday::Sat),
        "sun" => Ok(Weekday::Sun),
        _ => Err(TradingHoursError::DataInconsistent(format!(
            "unrecognized weekday {token:?} in pattern {original:?}"
        ))),
    }
}

fn mark_range(mask: &mut [bool; 7], from: Weekday, to: Weekday) {
    let mut current = index_of(from);
    let end = index_of(to);
    loop {
        mask[current] = true;
        if current == end {
            break;
        }
        current = (current + 1) % 7;
    }
}
