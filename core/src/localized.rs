// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Short, locale dependent rendering of times and date-times for display.

use icu::datetime::fieldsets::{T, YMD};
use icu::datetime::input::{Date as IcuDate, DateTime as IcuDateTime, Time as IcuTime};
use icu::datetime::{DateTimeFormatter, NoCalendarFormatter};
use jiff::civil::DateTime;

use crate::Error;
use crate::calendar::Locale;

/// Render the time of day of `dt` in the short style of `locale`, e.g.
/// `14:30` for `de-CH` or `2:30 PM` for `en-US`.
///
/// ## Errors
///
/// If the locale has no formatting data or `dt` can't be represented.
pub fn format_short_time(dt: DateTime, locale: &Locale) -> Result<String, Error> {
    let prefs = icu_locale(locale)?;
    let formatter = NoCalendarFormatter::try_new(prefs.into(), T::hm())
        .map_err(|e| Error::Formatting(e.to_string()))?;
    Ok(formatter.format(&icu_time(dt)?).to_string())
}

/// Render `dt` as a short date followed by a short time in the style of
/// `locale`, e.g. `05.03.24, 14:30` for `de-CH`.
///
/// ## Errors
///
/// If the locale has no formatting data or `dt` can't be represented.
pub fn format_short_date_time(dt: DateTime, locale: &Locale) -> Result<String, Error> {
    let prefs = icu_locale(locale)?;
    let formatter = DateTimeFormatter::try_new(prefs.into(), YMD::short().with_time_hm())
        .map_err(|e| Error::Formatting(e.to_string()))?;

    let date = IcuDate::try_new_iso(i32::from(dt.year()), to_u8(dt.month())?, to_u8(dt.day())?)
        .map_err(|e| Error::Formatting(e.to_string()))?;
    let value = IcuDateTime {
        date,
        time: icu_time(dt)?,
    };
    Ok(formatter.format(&value).to_string())
}

fn icu_locale(locale: &Locale) -> Result<icu::locale::Locale, Error> {
    let tag = locale.to_string();
    tag.parse::<icu::locale::Locale>()
        .map_err(|e| Error::InvalidLocale(format!("{tag}: {e}")))
}

fn icu_time(dt: DateTime) -> Result<IcuTime, Error> {
    IcuTime::try_new(to_u8(dt.hour())?, to_u8(dt.minute())?, to_u8(dt.second())?, 0)
        .map_err(|e| Error::Formatting(e.to_string()))
}

fn to_u8(field: i8) -> Result<u8, Error> {
    u8::try_from(field).map_err(|e| Error::Formatting(e.to_string()))
}
