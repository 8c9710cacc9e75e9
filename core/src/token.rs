// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compact date tokens, `YYYYMMDD` and `YYYYMMDDTHHMMSS`.
//!
//! NOTE: These tokens end up inside persisted rule strings, so the field
//! widths and separators must never change.

use std::fmt::Write;
use std::sync::Mutex;

use jiff::civil::DateTime;
use kalendar_ical::{ValueDate, ValueDateTime};

use crate::Error;

/// Which token a [`DateTokenFormatter`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    /// `YYYYMMDD`, for all-day values.
    DateOnly,

    /// `YYYYMMDDTHHMMSS` without zone suffix, for timed values.
    DateTime,
}

impl TokenStyle {
    /// The style for an all-day or a timed value.
    #[must_use]
    pub const fn for_all_day(all_day: bool) -> Self {
        if all_day {
            Self::DateOnly
        } else {
            Self::DateTime
        }
    }

    /// Length of every token of this style.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::DateOnly => 8,
            Self::DateTime => 15,
        }
    }
}

/// Formats dates into an internal buffer that is reused between calls.
///
/// Formatting borrows the formatter mutably, so one instance can't be used by
/// two callers at once. Share it through [`SharedDateTokenFormatter`].
#[derive(Debug, Clone)]
pub struct DateTokenFormatter {
    style: TokenStyle,
    buf: String,
}

impl DateTokenFormatter {
    /// Create a formatter for the given style.
    #[must_use]
    pub fn new(style: TokenStyle) -> Self {
        Self {
            style,
            buf: String::with_capacity(style.width()),
        }
    }

    /// Format a date, the result is valid until the next call.
    ///
    /// ## Errors
    ///
    /// Years outside `0000..=9999` don't fit the four digit year field.
    pub fn format(&mut self, dt: DateTime) -> Result<&str, Error> {
        if !(0..=9999).contains(&dt.year()) {
            return Err(Error::Formatting(format!(
                "year {} of {dt} does not fit a compact date token",
                dt.year()
            )));
        }

        self.buf.clear();
        let written = match self.style {
            TokenStyle::DateOnly => write!(self.buf, "{}", ValueDate::from(dt.date())),
            TokenStyle::DateTime => write!(self.buf, "{}", ValueDateTime::from(dt)),
        };
        written.map_err(|e| Error::Formatting(e.to_string()))?;
        Ok(&self.buf)
    }
}

/// A [`DateTokenFormatter`] that can be shared between threads.
///
/// Each call holds the lock for the whole format-and-copy step, so
/// concurrent callers never observe each other's partially written tokens.
#[derive(Debug)]
pub struct SharedDateTokenFormatter {
    inner: Mutex<DateTokenFormatter>,
}

impl SharedDateTokenFormatter {
    /// Create a shared formatter for the given style.
    #[must_use]
    pub fn new(style: TokenStyle) -> Self {
        Self {
            inner: Mutex::new(DateTokenFormatter::new(style)),
        }
    }

    /// Format a date into an owned token.
    ///
    /// ## Errors
    ///
    /// See [`DateTokenFormatter::format`].
    pub fn format(&self, dt: DateTime) -> Result<String, Error> {
        // A panic while formatting leaves only a stale buffer behind, which
        // the next call clears anyway.
        let mut formatter = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        formatter.format(dt).map(ToOwned::to_owned)
    }
}

/// Format a single occurrence date, `None` if it cannot be formatted.
///
/// All-day values become `YYYYMMDD`, timed values `YYYYMMDDTHHMMSS`.
#[must_use]
pub fn format_recurrence_date(date: Option<DateTime>, all_day: bool) -> Option<String> {
    let date = date?;
    let mut formatter = DateTokenFormatter::new(TokenStyle::for_all_day(all_day));
    match formatter.format(date) {
        Ok(token) => Some(token.to_owned()),
        Err(e) => {
            tracing::debug!(%date, all_day, "cannot format recurrence date: {e}");
            None
        }
    }
}
