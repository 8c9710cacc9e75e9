// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords of the recurrence grammar defined in iCalendar RFC 5545.

// Section 3.3.10 - Recurrence Rule parts
/// `FREQ` rule part: frequency of the recurrence, the only required part.
pub const KW_RRULE_FREQ: &str = "FREQ";
/// `UNTIL` rule part: inclusive end of the recurrence.
pub const KW_RRULE_UNTIL: &str = "UNTIL";
/// `COUNT` rule part: number of occurrences.
pub const KW_RRULE_COUNT: &str = "COUNT";
/// `INTERVAL` rule part: step between two recurrence periods.
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
/// `BYSECOND` rule part: seconds within a minute.
pub const KW_RRULE_BYSECOND: &str = "BYSECOND";
/// `BYMINUTE` rule part: minutes within an hour.
pub const KW_RRULE_BYMINUTE: &str = "BYMINUTE";
/// `BYHOUR` rule part: hours of the day.
pub const KW_RRULE_BYHOUR: &str = "BYHOUR";
/// `BYDAY` rule part: days of the week, optionally with an ordinal.
pub const KW_RRULE_BYDAY: &str = "BYDAY";
/// `BYMONTHDAY` rule part: days of the month.
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
/// `BYYEARDAY` rule part: days of the year.
pub const KW_RRULE_BYYEARDAY: &str = "BYYEARDAY";
/// `BYWEEKNO` rule part: weeks of the year.
pub const KW_RRULE_BYWEEKNO: &str = "BYWEEKNO";
/// `BYMONTH` rule part: months of the year.
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
/// `BYSETPOS` rule part: positions within the set of occurrences.
pub const KW_RRULE_BYSETPOS: &str = "BYSETPOS";
/// `WKST` rule part: day the work week starts on.
pub const KW_RRULE_WKST: &str = "WKST";

// Section 3.3.5 - Date-Time separator and UTC designator
/// Separator between the date and the time of a DATE-TIME.
pub const KW_DATETIME_SEPARATOR: char = 'T';
/// Suffix marking a DATE-TIME as UTC.
pub const KW_UTC_DESIGNATOR: char = 'Z';

/// Separator between the values of a multi-valued property.
pub const KW_VALUE_SEPARATOR: char = ',';

/// Separator between the parts of a recurrence rule.
pub const KW_RRULE_PART_SEPARATOR: char = ';';
