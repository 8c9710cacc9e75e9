// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule value type, RFC 5545 Section 3.3.10.

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_PART_SEPARATOR, KW_RRULE_UNTIL, KW_RRULE_WKST,
    KW_VALUE_SEPARATOR,
};
use crate::value::datetime::{ValueDateOrDateTime, value_date_or_date_time};
use crate::value::miscellaneous::{ValueExpected, bounded, signed, upper_word};

/// Recurrence rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRecurrenceRule {
    /// Frequency of recurrence
    pub freq: RecurrenceFrequency,
    /// Until date for recurrence
    pub until: Option<ValueDateOrDateTime>,
    /// Number of occurrences
    pub count: Option<u32>,
    /// Interval between recurrences
    pub interval: Option<u32>,
    /// Second specifier
    pub by_second: Vec<u8>,
    /// Minute specifier
    pub by_minute: Vec<u8>,
    /// Hour specifier
    pub by_hour: Vec<u8>,
    /// Day of week specifier
    pub by_day: Vec<WeekDayNum>,
    /// Day of month specifier
    pub by_month_day: Vec<i8>,
    /// Day of year specifier
    pub by_year_day: Vec<i16>,
    /// Week number specifier
    pub by_week_no: Vec<i8>,
    /// Month specifier
    pub by_month: Vec<u8>,
    /// Position in the set of occurrences
    pub by_set_pos: Vec<i16>,
    /// Start day of week
    pub wkst: Option<WeekDay>,
}

impl ValueRecurrenceRule {
    /// A rule with only the frequency set.
    #[must_use]
    pub const fn new(freq: RecurrenceFrequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            wkst: None,
        }
    }
}

/// Recurrence frequency
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of week with optional occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Day of the week
    pub day: WeekDay,
    /// Occurrence within the month or year (optional)
    pub occurrence: Option<i8>,
}

impl From<WeekDay> for WeekDayNum {
    fn from(day: WeekDay) -> Self {
        Self {
            day,
            occurrence: None,
        }
    }
}

/// Day of the week
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ;
///                 ; The rule parts are not ordered in any
///                 ; particular sequence.
///                 ;
///                 ; The FREQ rule part is REQUIRED,
///                 ; but MUST NOT occur more than once.
///                 ;
///                 ; The UNTIL or COUNT rule parts are OPTIONAL,
///                 ; but they MUST NOT occur in the same 'recur'.
///                 ;
///                 ; The other rule parts are OPTIONAL,
///                 ; but MUST NOT occur more than once.
/// ```
pub fn value_rrule<'src, I, E>() -> impl Parser<'src, I, ValueRecurrenceRule, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    recur_rule_part()
        .separated_by(just(KW_RRULE_PART_SEPARATOR))
        .allow_trailing()
        .at_least(1)
        .collect::<Vec<_>>()
        .try_map(|parts, span| {
            parts
                .into_iter()
                .try_fold(RuleParts::default(), RuleParts::apply)
                .and_then(RuleParts::finish)
                .map_err(|reason| E::Error::expected_found([reason], None, span))
        })
}

#[derive(Debug, Clone)]
enum Part {
    Freq(RecurrenceFrequency),
    Until(ValueDateOrDateTime),
    Count(u32),
    Interval(u32),
    BySecond(Vec<u8>),
    ByMinute(Vec<u8>),
    ByHour(Vec<u8>),
    ByDay(Vec<WeekDayNum>),
    ByMonthDay(Vec<i8>),
    ByYearDay(Vec<i16>),
    ByWeekNo(Vec<i8>),
    ByMonth(Vec<u8>),
    BySetPos(Vec<i16>),
    Wkst(WeekDay),
}

/// Rule parts seen so far, each slot filled at most once.
#[derive(Debug, Default)]
struct RuleParts {
    freq: Option<RecurrenceFrequency>,
    until: Option<ValueDateOrDateTime>,
    count: Option<u32>,
    interval: Option<u32>,
    by_second: Option<Vec<u8>>,
    by_minute: Option<Vec<u8>>,
    by_hour: Option<Vec<u8>>,
    by_day: Option<Vec<WeekDayNum>>,
    by_month_day: Option<Vec<i8>>,
    by_year_day: Option<Vec<i16>>,
    by_week_no: Option<Vec<i8>>,
    by_month: Option<Vec<u8>>,
    by_set_pos: Option<Vec<i16>>,
    wkst: Option<WeekDay>,
}

impl RuleParts {
    fn apply(mut self, part: Part) -> Result<Self, ValueExpected> {
        fn once<T>(slot: &mut Option<T>, value: T) -> Result<(), ValueExpected> {
            match slot {
                Some(_) => Err(ValueExpected::RRuleDuplicatePart),
                None => {
                    *slot = Some(value);
                    Ok(())
                }
            }
        }

        match part {
            Part::Freq(v) => once(&mut self.freq, v),
            Part::Until(v) => once(&mut self.until, v),
            Part::Count(v) => once(&mut self.count, v),
            Part::Interval(v) => once(&mut self.interval, v),
            Part::BySecond(v) => once(&mut self.by_second, v),
            Part::ByMinute(v) => once(&mut self.by_minute, v),
            Part::ByHour(v) => once(&mut self.by_hour, v),
            Part::ByDay(v) => once(&mut self.by_day, v),
            Part::ByMonthDay(v) => once(&mut self.by_month_day, v),
            Part::ByYearDay(v) => once(&mut self.by_year_day, v),
            Part::ByWeekNo(v) => once(&mut self.by_week_no, v),
            Part::ByMonth(v) => once(&mut self.by_month, v),
            Part::BySetPos(v) => once(&mut self.by_set_pos, v),
            Part::Wkst(v) => once(&mut self.wkst, v),
        }?;
        Ok(self)
    }

    fn finish(self) -> Result<ValueRecurrenceRule, ValueExpected> {
        let freq = self.freq.ok_or(ValueExpected::RRuleRequiredFreq)?;
        if self.until.is_some() && self.count.is_some() {
            return Err(ValueExpected::RRuleCountUntilExclusion);
        }

        Ok(ValueRecurrenceRule {
            freq,
            until: self.until,
            count: self.count,
            interval: self.interval,
            by_second: self.by_second.unwrap_or_default(),
            by_minute: self.by_minute.unwrap_or_default(),
            by_hour: self.by_hour.unwrap_or_default(),
            by_day: self.by_day.unwrap_or_default(),
            by_month_day: self.by_month_day.unwrap_or_default(),
            by_year_day: self.by_year_day.unwrap_or_default(),
            by_week_no: self.by_week_no.unwrap_or_default(),
            by_month: self.by_month.unwrap_or_default(),
            by_set_pos: self.by_set_pos.unwrap_or_default(),
            wkst: self.wkst,
        })
    }
}

/// ```txt
/// recur-rule-part = ( "FREQ" "=" freq )
///                 / ( "UNTIL" "=" enddate )
///                 / ( "COUNT" "=" 1*DIGIT )
///                 / ( "INTERVAL" "=" 1*DIGIT )
///                 / ( "BYSECOND" "=" byseclist )      ; seconds   0 to 60
///                 / ( "BYMINUTE" "=" byminlist )      ; minutes   0 to 59
///                 / ( "BYHOUR" "=" byhrlist )         ; hour      0 to 23
///                 / ( "BYDAY" "=" bywdaylist )
///                 / ( "BYMONTHDAY" "=" bymodaylist )  ; ordmoday  1 to 31
///                 / ( "BYYEARDAY" "=" byyrdaylist )   ; ordyrday  1 to 366
///                 / ( "BYWEEKNO" "=" bywknolist )     ; ordwk     1 to 53
///                 / ( "BYMONTH" "=" bymolist )        ; monthnum  1 to 12
///                 / ( "BYSETPOS" "=" bysplist )       ; setposday = yeardaynum
///                 / ( "WKST" "=" weekday )
/// ```
fn recur_rule_part<'src, I, E>() -> impl Parser<'src, I, Part, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let kw = |kw| just(kw).ignore_then(just('='));
    let ordyrday = || signed(bounded(1..=3, 1..=366));
    let ordwk = || signed(bounded(1..=2, 1..=53));

    choice((
        kw(KW_RRULE_FREQ).ignore_then(freq()).map(Part::Freq),
        kw(KW_RRULE_UNTIL)
            .ignore_then(value_date_or_date_time())
            .map(Part::Until),
        kw(KW_RRULE_COUNT)
            .ignore_then(positive_u32())
            .map(Part::Count),
        kw(KW_RRULE_INTERVAL)
            .ignore_then(positive_u32())
            .map(Part::Interval),
        kw(KW_RRULE_BYSECOND)
            .ignore_then(list(bounded(1..=2, 0..=60)))
            .map(Part::BySecond),
        kw(KW_RRULE_BYMINUTE)
            .ignore_then(list(bounded(1..=2, 0..=59)))
            .map(Part::ByMinute),
        kw(KW_RRULE_BYHOUR)
            .ignore_then(list(bounded(1..=2, 0..=23)))
            .map(Part::ByHour),
        kw(KW_RRULE_BYDAY)
            .ignore_then(list(weekdaynum()))
            .map(Part::ByDay),
        kw(KW_RRULE_BYMONTHDAY)
            .ignore_then(list(signed(bounded(1..=2, 1..=31))))
            .map(Part::ByMonthDay),
        kw(KW_RRULE_BYYEARDAY)
            .ignore_then(list(ordyrday()))
            .map(Part::ByYearDay),
        kw(KW_RRULE_BYWEEKNO)
            .ignore_then(list(ordwk()))
            .map(Part::ByWeekNo),
        kw(KW_RRULE_BYMONTH)
            .ignore_then(list(bounded(1..=2, 1..=12)))
            .map(Part::ByMonth),
        kw(KW_RRULE_BYSETPOS)
            .ignore_then(list(ordyrday()))
            .map(Part::BySetPos),
        kw(KW_RRULE_WKST).ignore_then(weekday()).map(Part::Wkst),
    ))
}

/// ```txt
/// freq        = "SECONDLY" / "MINUTELY" / "HOURLY" / "DAILY"
///             / "WEEKLY" / "MONTHLY" / "YEARLY"
/// ```
fn freq<'src, I, E>() -> impl Parser<'src, I, RecurrenceFrequency, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    upper_word().try_map(|word, span| {
        word.parse()
            .map_err(|_| E::Error::expected_found([ValueExpected::Frequency], None, span))
    })
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ```
fn weekdaynum<'src, I, E>() -> impl Parser<'src, I, WeekDayNum, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    signed(bounded(1..=2, 1..=53))
        .or_not()
        .then(weekday())
        .map(|(occurrence, day)| WeekDayNum { day, occurrence })
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src, I, E>() -> impl Parser<'src, I, WeekDay, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ 'A'..='Z' => c }
        .repeated()
        .exactly(2)
        .collect::<String>()
        .try_map(|word, span| {
            word.parse()
                .map_err(|_| E::Error::expected_found([ValueExpected::WeekDay], None, span))
        })
}

/// COMMA-separated, non-empty list of `item`.
fn list<'src, I, E, T, P>(item: P) -> impl Parser<'src, I, Vec<T>, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    P: Parser<'src, I, T, E> + Clone,
{
    item.separated_by(just(KW_VALUE_SEPARATOR))
        .at_least(1)
        .collect()
}

/// Positive u32 (1 or more digits)
fn positive_u32<'src, I, E>() -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    bounded(1..=10, 1..=u32::MAX) // u32 max is 10 digits
}
