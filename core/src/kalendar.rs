// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::calendar::{LocalCalendar, Locale, WeekRules};
use crate::{Config, Error, datetime, localized, recurrence};

/// Recurrence core bound to a configured time zone and locale.
#[derive(Debug, Clone)]
pub struct Kalendar {
    now: Zoned,
    tz: TimeZone,
    locale: Locale,
}

impl Kalendar {
    /// Creates a new instance from the given configuration.
    ///
    /// ## Errors
    ///
    /// If the configured time zone is unknown.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let tz = config.time_zone()?;
        let locale = config.locale();
        tracing::debug!(tz = tz.iana_name(), %locale, "kalendar initialized");

        Ok(Self {
            now: Zoned::now().with_time_zone(tz.clone()),
            tz,
            locale,
        })
    }

    /// The current time, in the configured time zone.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// The configured time zone.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// The configured locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Week rules of the configured locale.
    pub fn week_rules(&self) -> WeekRules {
        self.locale.week_rules()
    }

    /// Midnight of today, carrying the week rules of `locale`.
    ///
    /// ## Errors
    ///
    /// If midnight is out of the supported range.
    pub fn start_of_day_calendar(&self, locale: &Locale) -> Result<LocalCalendar, Error> {
        LocalCalendar::start_of_day(&self.now, locale)
    }

    /// Short time of day of `dt` in the configured locale.
    ///
    /// ## Errors
    ///
    /// If the locale has no formatting data.
    pub fn format_short_time(&self, dt: &Zoned) -> Result<String, Error> {
        localized::format_short_time(dt.datetime(), &self.locale)
    }

    /// Short date and time of `dt` in the configured locale.
    ///
    /// ## Errors
    ///
    /// If the locale has no formatting data.
    pub fn format_short_date_time(&self, dt: &Zoned) -> Result<String, Error> {
        localized::format_short_date_time(dt.datetime(), &self.locale)
    }

    /// Midnight of the given day in the configured time zone, month 1-based.
    ///
    /// ## Errors
    ///
    /// If the date does not exist.
    pub fn make_date(&self, year: i16, month: i8, day: i8) -> Result<Zoned, Error> {
        datetime::make_date_in(&self.tz, year, month, day)
    }

    /// Parse exception dates, moving UTC values into the configured time zone.
    pub fn parse_exception_dates(&self, text: Option<&str>) -> Vec<DateTime> {
        recurrence::parse_exception_dates(text, &self.tz)
    }

    /// See [`Kalendar::parse_exception_dates`].
    ///
    /// ## Errors
    ///
    /// If the text is malformed.
    pub fn try_parse_exception_dates(&self, text: &str) -> Result<Vec<DateTime>, Error> {
        recurrence::try_parse_exception_dates(text, &self.tz)
    }
}
