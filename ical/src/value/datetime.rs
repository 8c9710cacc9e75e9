// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DATE, TIME and DATE-TIME values as defined in RFC 5545 Section 3.3.

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::keyword::{KW_DATETIME_SEPARATOR, KW_UTC_DESIGNATOR};
use crate::value::miscellaneous::{ValueExpected, bounded};

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    /// Year component.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl ValueDate {
    /// Convert to `jiff::civil::Date`.
    ///
    /// ## Errors
    ///
    /// If the fields do not name a real calendar day.
    #[cfg(feature = "jiff")]
    pub fn civil_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        self.try_into()
    }
}

#[cfg(feature = "jiff")]
impl TryFrom<ValueDate> for jiff::civil::Date {
    type Error = jiff::Error;

    fn try_from(value: ValueDate) -> Result<Self, Self::Error> {
        jiff::civil::Date::new(value.year, value.month, value.day)
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Date> for ValueDate {
    fn from(value: jiff::civil::Date) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

/// Time value defined in the RFC 5545 Section 3.3.12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: u8,

    /// Second component, 0-60 (60 for leap second).
    pub second: u8,

    /// Whether the time is in UTC (indicated by a trailing 'Z').
    pub utc: bool,
}

impl ValueTime {
    /// Create a new `ValueTime` from components.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            utc,
        }
    }

    /// Convert to `jiff::civil::Time`, contracting the leap second 60 to 59.
    ///
    /// ## Errors
    ///
    /// If a field is out of range.
    #[cfg(feature = "jiff")]
    pub fn civil_time(self) -> Result<jiff::civil::Time, jiff::Error> {
        let field = |v: u8| i8::try_from(v).unwrap_or(i8::MAX);
        jiff::civil::Time::new(
            field(self.hour),
            field(self.minute),
            field(self.second.min(59)),
            0,
        )
    }
}

/// Date-Time value defined in the RFC 5545 Section 3.3.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueDateTime {
    /// Date component.
    pub date: ValueDate,

    /// Time component.
    pub time: ValueTime,
}

impl ValueDateTime {
    /// Create a new `ValueDateTime` from its date and time.
    #[must_use]
    pub const fn new(date: ValueDate, time: ValueTime) -> Self {
        Self { date, time }
    }

    /// Convert to `jiff::civil::DateTime`, ignoring the UTC designator.
    ///
    /// ## Errors
    ///
    /// If the date or the time is out of range.
    #[cfg(feature = "jiff")]
    pub fn civil_date_time(self) -> Result<jiff::civil::DateTime, jiff::Error> {
        Ok(self.date.civil_date()?.to_datetime(self.time.civil_time()?))
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::DateTime> for ValueDateTime {
    #[expect(clippy::cast_sign_loss)]
    fn from(value: jiff::civil::DateTime) -> Self {
        let time = ValueTime::new(
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
            false,
        );
        Self::new(value.date().into(), time)
    }
}

/// Either a DATE or a DATE-TIME value, as allowed by UNTIL and EXDATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDateOrDateTime {
    /// An all-day value.
    Date(ValueDate),

    /// A value with a time of day.
    DateTime(ValueDateTime),
}

impl ValueDateOrDateTime {
    /// The calendar date part.
    #[must_use]
    pub const fn date(&self) -> ValueDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date,
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
pub fn value_date<'src, I, E>() -> impl Parser<'src, I, ValueDate, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    bounded(4..=4, 0..=9999)
        .then(bounded(2..=2, 1..=12))
        .then(bounded(2..=2, 1..=31))
        .try_map(|((year, month), day), span| {
            let date = ValueDate { year, month, day };
            if is_real_date(date) {
                Ok(date)
            } else {
                Err(E::Error::expected_found([ValueExpected::Date], None, span))
            }
        })
}

#[cfg(feature = "jiff")]
fn is_real_date(date: ValueDate) -> bool {
    jiff::civil::Date::new(date.year, date.month, date.day).is_ok()
}

#[cfg(not(feature = "jiff"))]
fn is_real_date(date: ValueDate) -> bool {
    let leap = (date.year % 4 == 0 && date.year % 100 != 0) || date.year % 400 == 0;
    let days_in_month = match date.month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    date.day <= days_in_month
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// ;The "60" value is used to account for positive "leap" seconds.
///
/// time-utc     = "Z"
/// ```
pub fn value_time<'src, I, E>() -> impl Parser<'src, I, ValueTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    bounded(2..=2, 0..=23)
        .then(bounded(2..=2, 0..=59))
        .then(bounded(2..=2, 0..=60))
        .then(just(KW_UTC_DESIGNATOR).or_not())
        .map(|(((hour, minute), second), utc)| ValueTime::new(hour, minute, second, utc.is_some()))
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
/// ```
pub fn value_date_time<'src, I, E>() -> impl Parser<'src, I, ValueDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date()
        .then_ignore(just(KW_DATETIME_SEPARATOR))
        .then(value_time())
        .map(|(date, time)| ValueDateTime::new(date, time))
}

/// A DATE-TIME value, or a DATE value. Date-time is tried first.
pub fn value_date_or_date_time<'src, I, E>()
-> impl Parser<'src, I, ValueDateOrDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    choice((
        value_date_time().map(ValueDateOrDateTime::DateTime),
        value_date().map(ValueDateOrDateTime::Date),
    ))
}

#[cfg(test)]
mod tests {
    use chumsky::input::Stream;

    use super::*;

    #[test]
    fn parses_date() {
        fn parse(src: &str) -> Result<ValueDate, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_date::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.4
            ("19970714", ValueDate { year: 1997, month: 7, day: 14 }),
            // extra tests
            ("20240305", ValueDate { year: 2024, month: 3, day: 5 }),
            ("20000229", ValueDate { year: 2000, month: 2, day: 29 }), // leap year
            ("00010101", ValueDate { year: 1, month: 1, day: 1 }),
        ];
        for (src, expected) in success_cases {
            assert_eq!(parse(src).unwrap(), expected);
        }

        let fail_cases = [
            "20241301",  // invalid month
            "20240001",  // invalid month
            "20240132",  // invalid day
            "19970230",  // February 30th
            "21000229",  // not a leap year
            "abcd1234",  // invalid characters
            "2024011",   // invalid length
            "202401011", // invalid length
            "2024-01-01",
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_time() {
        fn parse(src: &str) -> Result<ValueTime, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_time::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.12
            ("135501",  ValueTime::new(13, 55,  1, false)),
            ("135501Z", ValueTime::new(13, 55,  1, true)),
            // extra tests
            ("000000",  ValueTime::new( 0,  0,  0, false)),
            ("235959",  ValueTime::new(23, 59, 59, false)),
            ("000060",  ValueTime::new( 0,  0, 60, false)), // leap second
        ];
        for (src, expected) in success_cases {
            assert_eq!(parse(src).unwrap(), expected, "Failed for {src}");
        }

        let fail_cases = [
            "230000-0800", // numeric zones are not part of TIME
            "240000",      // invalid hour
            "126000",      // invalid minute
            "123461",      // invalid second
            "12000",       // missing digit
            "120000ZZ",    // extra character
            "",
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_date_or_date_time() {
        fn parse(src: &str) -> Result<ValueDateOrDateTime, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_date_or_date_time::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        let date = ValueDate { year: 1998, month: 1, day: 18 };
        assert_eq!(parse("19980118").unwrap(), ValueDateOrDateTime::Date(date));
        assert_eq!(
            parse("19980118T230000").unwrap(),
            ValueDateOrDateTime::DateTime(ValueDateTime::new(
                date,
                ValueTime::new(23, 0, 0, false)
            ))
        );
        assert!(parse("19980118T").is_err());
        assert!(parse("19980118T2300").is_err());
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn converts_to_and_from_civil_values() {
        let dt = jiff::civil::date(2024, 3, 5).at(14, 30, 0, 0);
        let value = ValueDateTime::from(dt);
        assert_eq!(value.date, ValueDate { year: 2024, month: 3, day: 5 });
        assert_eq!(value.time, ValueTime::new(14, 30, 0, false));
        assert_eq!(value.civil_date_time().unwrap(), dt);

        let leap = ValueTime::new(23, 59, 60, true);
        assert_eq!(leap.civil_time().unwrap(), jiff::civil::time(23, 59, 59, 0));
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn rejects_out_of_range_fields_on_conversion() {
        let feb_30 = ValueDate { year: 2024, month: 2, day: 30 };
        assert!(feb_30.civil_date().is_err());
        assert!(jiff::civil::Date::try_from(feb_30).is_err());

        assert!(ValueTime::new(24, 0, 0, false).civil_time().is_err());
        assert!(ValueTime::new(12, 200, 0, false).civil_time().is_err());

        let dt = ValueDateTime::new(feb_30, ValueTime::new(10, 0, 0, false));
        assert!(dt.civil_date_time().is_err());
    }
}
