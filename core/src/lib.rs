// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Normalization of stored recurrence rules: classification into the
//! recurrence categories offered for editing, exception date lists, compact
//! date tokens, day boundaries and locale week rules.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod calendar;
mod category;
mod config;
mod datetime;
mod error;
mod kalendar;
mod localized;
mod recurrence;
mod token;

pub use crate::calendar::{LocalCalendar, Locale, MIN_DAYS_IN_FIRST_WEEK, WeekOfYear, WeekRules};
pub use crate::category::RecurrenceCategory;
pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{
    END_OF_DAY, end_of_day, make_date, make_date_in, remove_time, start_of_day,
};
pub use crate::error::{Error, RuleKind};
pub use crate::kalendar::Kalendar;
pub use crate::localized::{format_short_date_time, format_short_time};
pub use crate::recurrence::{
    classify, format_exception_dates, parse_exception_dates, try_classify,
    try_parse_exception_dates,
};
pub use crate::token::{
    DateTokenFormatter, SharedDateTokenFormatter, TokenStyle, format_recurrence_date,
};
