// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical RFC 5545 text for the recurrence values.

use std::fmt::{self, Display, Formatter, Write};

use crate::keyword::{
    KW_DATETIME_SEPARATOR, KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH,
    KW_RRULE_BYMONTHDAY, KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO,
    KW_RRULE_BYYEARDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL,
    KW_RRULE_PART_SEPARATOR, KW_RRULE_UNTIL, KW_RRULE_WKST, KW_UTC_DESIGNATOR,
    KW_VALUE_SEPARATOR,
};
use crate::value::{
    ValueDate, ValueDateOrDateTime, ValueDateTime, ValueRecurrenceRule, ValueTime, WeekDayNum,
};

/// Formats as `YYYYMMDD`.
impl Display for ValueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Formats as `HHMMSS[Z]`.
impl Display for ValueTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            f.write_char(KW_UTC_DESIGNATOR)?;
        }
        Ok(())
    }
}

/// Formats as `YYYYMMDDTHHMMSS[Z]`.
impl Display for ValueDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KW_DATETIME_SEPARATOR}{}", self.date, self.time)
    }
}

impl Display for ValueDateOrDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => date.fmt(f),
            Self::DateTime(dt) => dt.fmt(f),
        }
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(occurrence) = self.occurrence {
            write!(f, "{occurrence}")?;
        }
        write!(f, "{}", self.day)
    }
}

/// Formats as `FREQ=...;...`, with the parts in RFC 5545 grammar order.
impl Display for ValueRecurrenceRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{KW_RRULE_FREQ}={}", self.freq)?;

        // UNTIL or COUNT (optional, mutually exclusive)
        if let Some(until) = &self.until {
            write_part(f, KW_RRULE_UNTIL, until)?;
        } else if let Some(count) = self.count {
            write_part(f, KW_RRULE_COUNT, count)?;
        }

        if let Some(interval) = self.interval {
            write_part(f, KW_RRULE_INTERVAL, interval)?;
        }

        write_list(f, KW_RRULE_BYSECOND, &self.by_second)?;
        write_list(f, KW_RRULE_BYMINUTE, &self.by_minute)?;
        write_list(f, KW_RRULE_BYHOUR, &self.by_hour)?;
        write_list(f, KW_RRULE_BYDAY, &self.by_day)?;
        write_list(f, KW_RRULE_BYMONTHDAY, &self.by_month_day)?;
        write_list(f, KW_RRULE_BYYEARDAY, &self.by_year_day)?;
        write_list(f, KW_RRULE_BYWEEKNO, &self.by_week_no)?;
        write_list(f, KW_RRULE_BYMONTH, &self.by_month)?;
        write_list(f, KW_RRULE_BYSETPOS, &self.by_set_pos)?;

        if let Some(wkst) = self.wkst {
            write_part(f, KW_RRULE_WKST, wkst)?;
        }
        Ok(())
    }
}

fn write_part(f: &mut Formatter<'_>, name: &str, value: impl Display) -> fmt::Result {
    write!(f, "{KW_RRULE_PART_SEPARATOR}{name}={value}")
}

/// Empty lists are omitted.
fn write_list<T: Display>(f: &mut Formatter<'_>, name: &str, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }

    write!(f, "{KW_RRULE_PART_SEPARATOR}{name}=")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_char(KW_VALUE_SEPARATOR)?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
