//! Suffix-digit filter
//!
//! Splits a large friend list across several runs: each run only scans the
//! profiles whose id ends in one of the configured digits.

use crate::profile::ProfileId;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a filter expression
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("'{0}' is not a digit")]
    NotADigit(String),

    #[error("digit {0} is outside 0-9")]
    OutOfRange(u32),

    #[error("range start {start} is greater than range end {end}")]
    ReversedRange { start: u8, end: u8 },
}

/// Set of allowed last digits, every element in `0..=9`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    digits: BTreeSet<u8>,
}

impl FilterSpec {
    /// Parses `"d"` or `"d1-d2"` (inclusive, `d1 <= d2`)
    ///
    /// # Example
    ///
    /// ```
    /// use comment_scout::profile::FilterSpec;
    ///
    /// let filter = FilterSpec::parse("3-5").unwrap();
    /// assert_eq!(filter.digits().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert!(FilterSpec::parse("7").unwrap().contains(7));
    /// assert!(FilterSpec::parse("5-3").is_err());
    /// ```
    pub fn parse(expr: &str) -> Result<Self, FilterParseError> {
        let expr = expr.trim();

        let digits = match expr.split_once('-') {
            Some((start, end)) => {
                let start = parse_digit(start)?;
                let end = parse_digit(end)?;
                if start > end {
                    return Err(FilterParseError::ReversedRange { start, end });
                }
                (start..=end).collect()
            }
            None => BTreeSet::from([parse_digit(expr)?]),
        };

        Ok(Self { digits })
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Digits in ascending order
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }

    /// True iff the id's last character is a digit in this filter
    ///
    /// Ids that do not end in a digit never pass.
    pub fn accepts(&self, id: &ProfileId) -> bool {
        id.last_digit().is_some_and(|d| self.contains(d))
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<String> = self.digits.iter().map(u8::to_string).collect();
        write!(f, "[{}]", digits.join(", "))
    }
}

fn parse_digit(part: &str) -> Result<u8, FilterParseError> {
    let part = part.trim();
    let value: u32 = part
        .parse()
        .map_err(|_| FilterParseError::NotADigit(part.to_string()))?;
    if value > 9 {
        return Err(FilterParseError::OutOfRange(value));
    }
    Ok(value as u8)
}

/// Turns the optional textual filter into a `FilterSpec`
///
/// A malformed expression is reported and treated as "no filtering" so a
/// typo never aborts the run.
pub fn parse_filter_argument(expr: Option<&str>) -> Option<FilterSpec> {
    let expr = expr.map(str::trim).filter(|e| !e.is_empty())?;

    match FilterSpec::parse(expr) {
        Ok(filter) => {
            tracing::info!("Suffix filter set: last digit in {}", filter);
            Some(filter)
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring filter '{}': {} (expected a digit like 0 or a range like 0-5)",
                expr,
                e
            );
            None
        }
    }
}
