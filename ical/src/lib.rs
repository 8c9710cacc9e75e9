// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse and format the iCalendar recurrence values used to store repeating
//! events: the RECUR value type (RFC 5545 Section 3.3.10) and the date lists
//! of the EXDATE property (RFC 5545 Section 3.8.5.1).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod formatter;
pub mod keyword;
mod parser;
pub mod value;

pub use crate::parser::{ParseError, parse_exception_dates, parse_recurrence_rule};
pub use crate::value::{
    RecurrenceFrequency, ValueDate, ValueDateOrDateTime, ValueDateTime, ValueRecurrenceRule,
    ValueTime, WeekDay, WeekDayNum,
};
