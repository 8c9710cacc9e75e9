// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::input::Stream;
use chumsky::prelude::*;

use crate::value::{ValueDateOrDateTime, ValueRecurrenceRule, value_rrule, values_exdate};

/// Parse a recurrence rule value such as `FREQ=WEEKLY;INTERVAL=2`.
///
/// ## Errors
///
/// If the text does not follow the RECUR grammar of RFC 5545, every error
/// found is returned.
///
/// ## Examples
///
/// ```
/// # use kalendar_ical::{RecurrenceFrequency, parse_recurrence_rule};
/// let rule = parse_recurrence_rule("FREQ=WEEKLY;INTERVAL=2").unwrap();
/// assert_eq!(rule.freq, RecurrenceFrequency::Weekly);
/// assert_eq!(rule.interval, Some(2));
///
/// assert!(parse_recurrence_rule("FREQ=FORTNIGHTLY").is_err());
/// ```
pub fn parse_recurrence_rule(src: &str) -> Result<ValueRecurrenceRule, Vec<ParseError>> {
    let stream = Stream::from_iter(src.chars());
    value_rrule::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(stream)
        .into_result()
        .map_err(into_parse_errors)
}

/// Parse the value list of an EXDATE property, e.g. `20240305,20240312`.
///
/// ## Errors
///
/// If the text is not a non-empty list of DATE values or of DATE-TIME
/// values, every error found is returned.
///
/// ## Examples
///
/// ```
/// # use kalendar_ical::parse_exception_dates;
/// let dates = parse_exception_dates("20240305,20240312").unwrap();
/// assert_eq!(dates.len(), 2);
/// assert_eq!(dates[0].to_string(), "20240305");
/// ```
pub fn parse_exception_dates(src: &str) -> Result<Vec<ValueDateOrDateTime>, Vec<ParseError>> {
    let stream = Stream::from_iter(src.chars());
    values_exdate::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(stream)
        .into_result()
        .map_err(into_parse_errors)
}

fn into_parse_errors(errs: Vec<Rich<'_, char>>) -> Vec<ParseError> {
    errs.into_iter().map(ParseError::from).collect()
}

/// A syntax error in a recurrence value, detached from the source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at {}..{}", span.start, span.end)]
pub struct ParseError {
    /// Character range of the offending input.
    pub span: Range<usize>,

    /// Human readable reason, e.g. `found 'X' expected ...`.
    pub reason: String,
}

impl From<Rich<'_, char>> for ParseError {
    fn from(err: Rich<'_, char>) -> Self {
        Self {
            span: err.span().into_range(),
            reason: err.reason().to_string(),
        }
    }
}
