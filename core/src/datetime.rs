// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;

use crate::Error;

/// The last whole second of a day, 23:59:59.000.
pub const END_OF_DAY: Time = Time::constant(23, 59, 59, 0);

/// The same day at 00:00:00.000, in the same time zone.
///
/// ## Errors
///
/// If the result is out of the supported range.
pub fn start_of_day(dt: &Zoned) -> Result<Zoned, Error> {
    from_local_datetime(dt.time_zone(), dt.date().to_datetime(Time::midnight()))
}

/// The same day at 23:59:59.000, in the same time zone.
///
/// ## Errors
///
/// If the result is out of the supported range.
pub fn end_of_day(dt: &Zoned) -> Result<Zoned, Error> {
    from_local_datetime(dt.time_zone(), dt.date().to_datetime(END_OF_DAY))
}

/// Drop the time of day, keeping the date and time zone.
///
/// ## Errors
///
/// If the result is out of the supported range.
pub fn remove_time(dt: &Zoned) -> Result<Zoned, Error> {
    start_of_day(dt)
}

/// Midnight of the given day in the system time zone.
///
/// The month is 1-based.
///
/// ## Errors
///
/// If the date does not exist, e.g. February 30.
pub fn make_date(year: i16, month: i8, day: i8) -> Result<Zoned, Error> {
    make_date_in(&TimeZone::system(), year, month, day)
}

/// Midnight of the given day in `tz`.
///
/// ## Errors
///
/// If the date does not exist, e.g. February 30.
pub fn make_date_in(tz: &TimeZone, year: i16, month: i8, day: i8) -> Result<Zoned, Error> {
    let date = Date::new(year, month, day)?;
    from_local_datetime(tz, date.to_datetime(Time::midnight()))
}

/// Place a wall clock time into a time zone.
///
/// A time repeated by a transition resolves to the earlier instant, a time
/// skipped by one resolves to the instant after the gap.
pub(crate) fn from_local_datetime(tz: &TimeZone, dt: DateTime) -> Result<Zoned, Error> {
    Ok(tz.to_ambiguous_zoned(dt).compatible()?)
}
