// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value types of the recurrence grammar.
//!
//! This module handles the parsing and validation of the iCalendar value
//! types needed by recurring events, as defined in RFC 5545 Section 3.3.

mod datetime;
mod exdate;
mod miscellaneous;
mod rrule;

pub use datetime::{ValueDate, ValueDateOrDateTime, ValueDateTime, ValueTime};
pub use rrule::{RecurrenceFrequency, ValueRecurrenceRule, WeekDay, WeekDayNum};

pub(crate) use exdate::values_exdate;
pub(crate) use rrule::value_rrule;
