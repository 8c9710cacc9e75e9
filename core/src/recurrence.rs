// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Normalize stored recurrence rules and exception dates.
//!
//! The outward functions never fail: malformed input is logged and collapses
//! to `None` or an empty list. The `try_*` variants keep the error.

use std::collections::HashSet;

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use kalendar_ical::{ValueDateOrDateTime, ValueRecurrenceRule};

use crate::error::RuleKind;
use crate::token::{DateTokenFormatter, TokenStyle};
use crate::{Error, RecurrenceCategory};

/// Separator between the values of a formatted exception date list.
const EXDATE_SEPARATOR: &str = ",";

/// Classify a recurrence rule, `None` for empty or malformed rules.
///
/// See [`try_classify`] for the precedence of the rule parts.
#[must_use]
pub fn classify(rule: Option<&str>) -> Option<RecurrenceCategory> {
    let rule = rule.filter(|s| !s.is_empty())?;
    match try_classify(rule) {
        Ok(category) => Some(category),
        Err(e) => {
            tracing::error!(rule, "failed to classify recurrence rule: {e}");
            None
        }
    }
}

/// Classify a recurrence rule.
///
/// Any weekday list makes the rule [`RecurrenceCategory::Workdaily`],
/// whichever days are listed. Otherwise an interval of exactly 2 makes it
/// [`RecurrenceCategory::Biweekly`], whatever the frequency. Otherwise the
/// frequency decides.
///
/// ## Errors
///
/// [`Error::MalformedRule`] if the rule does not parse or has a sub-daily
/// frequency.
pub fn try_classify(rule: &str) -> Result<RecurrenceCategory, Error> {
    let parsed = kalendar_ical::parse_recurrence_rule(rule)
        .map_err(|errs| Error::malformed(RuleKind::RecurrenceRule, rule, &errs))?;

    category_of(&parsed).map_err(|reason| Error::MalformedRule {
        kind: RuleKind::RecurrenceRule,
        text: rule.to_owned(),
        reason,
    })
}

fn category_of(rule: &ValueRecurrenceRule) -> Result<RecurrenceCategory, String> {
    if !rule.by_day.is_empty() {
        Ok(RecurrenceCategory::Workdaily)
    } else if rule.interval == Some(2) {
        Ok(RecurrenceCategory::Biweekly)
    } else {
        RecurrenceCategory::try_from(rule.freq)
            .map_err(|freq| format!("frequency {freq} has no recurrence category"))
    }
}

/// Parse an exception date list, empty for empty or malformed input.
///
/// All-day values yield midnight of that day. UTC values are converted to
/// `tz`, floating values are kept as written.
#[must_use]
pub fn parse_exception_dates(text: Option<&str>, tz: &TimeZone) -> Vec<DateTime> {
    let Some(text) = text.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match try_parse_exception_dates(text, tz) {
        Ok(dates) => dates,
        Err(e) => {
            tracing::error!(text, "failed to parse recurrence exception dates: {e}");
            Vec::new()
        }
    }
}

/// Parse an exception date list, keeping the source order.
///
/// ## Errors
///
/// [`Error::MalformedRule`] if the text does not parse, or
/// [`Error::InvalidDate`] if a UTC value cannot be moved into `tz`.
pub fn try_parse_exception_dates(text: &str, tz: &TimeZone) -> Result<Vec<DateTime>, Error> {
    let values = kalendar_ical::parse_exception_dates(text)
        .map_err(|errs| Error::malformed(RuleKind::ExceptionDates, text, &errs))?;

    values.into_iter().map(|v| to_local(v, tz)).collect()
}

fn to_local(value: ValueDateOrDateTime, tz: &TimeZone) -> Result<DateTime, Error> {
    match value {
        ValueDateOrDateTime::Date(date) => Ok(date.civil_date()?.to_datetime(Time::midnight())),
        ValueDateOrDateTime::DateTime(dt) if dt.time.utc => {
            let zoned = dt.civil_date_time()?.to_zoned(TimeZone::UTC)?;
            Ok(zoned.with_time_zone(tz.clone()).datetime())
        }
        ValueDateOrDateTime::DateTime(dt) => Ok(dt.civil_date_time()?),
    }
}

/// Format exception dates as a comma separated list of `YYYYMMDD` tokens.
///
/// Returns `None` for an empty list or if a date cannot be formatted. A day
/// listed twice is written once, at its first position.
#[must_use]
pub fn format_exception_dates(dates: Option<&[Date]>) -> Option<String> {
    let dates = dates.filter(|d| !d.is_empty())?;

    let mut formatter = DateTokenFormatter::new(TokenStyle::DateOnly);
    let mut seen = HashSet::with_capacity(dates.len());
    let mut tokens = Vec::with_capacity(dates.len());
    for &date in dates {
        if !seen.insert(date) {
            continue;
        }

        match formatter.format(date.to_datetime(Time::midnight())) {
            Ok(token) => tokens.push(token.to_owned()),
            Err(e) => {
                tracing::error!(%date, "failed to format recurrence exception dates: {e}");
                return None;
            }
        }
    }
    Some(tokens.join(EXDATE_SEPARATOR))
}
