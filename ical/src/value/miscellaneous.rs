// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric building blocks shared by the value parsers.

use std::borrow::Cow;
use std::ops::{Neg, RangeInclusive};

use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

/// Failure reasons when a specific value type was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueExpected {
    /// A date that exists in the calendar was expected
    Date,
    /// A number inside the range allowed by the grammar was expected
    OutOfRange,
    /// A 32-bit unsigned integer value was expected
    U32,
    /// A known frequency name was expected
    Frequency,
    /// A two letter weekday name was expected
    WeekDay,
    /// A recurrence rule part occurred more than once
    RRuleDuplicatePart,
    /// The FREQ recurrence rule part is missing
    RRuleRequiredFreq,
    /// UNTIL and COUNT occur in the same recurrence rule
    RRuleCountUntilExclusion,
    /// A list of dates mixes DATE and DATE-TIME values
    MixedDateKinds,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        let label = match expected {
            ValueExpected::Date => "invalid date",
            ValueExpected::OutOfRange => "number out of range",
            ValueExpected::U32 => "u32 out of range",
            ValueExpected::Frequency => "unknown frequency",
            ValueExpected::WeekDay => "unknown weekday",
            ValueExpected::RRuleDuplicatePart => "duplicate recurrence rule part",
            ValueExpected::RRuleRequiredFreq => "missing required FREQ part",
            ValueExpected::RRuleCountUntilExclusion => "UNTIL and COUNT are mutually exclusive",
            ValueExpected::MixedDateKinds => "DATE and DATE-TIME values cannot be mixed",
        };
        Self::Label(Cow::Borrowed(label))
    }
}

/// Between `width.start()` and `width.end()` ASCII digits, folded into a `u32`.
pub fn digits<'src, I, E>(width: RangeInclusive<usize>) -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(*width.start())
        .at_most(*width.end())
        .collect::<String>()
        .try_map(|str, span| {
            lexical::parse::<u32, _>(&str)
                .map_err(|_| E::Error::expected_found([ValueExpected::U32], None, span))
        })
}

/// Unsigned number of the given digit width, restricted to `range`.
pub fn bounded<'src, I, E, T>(
    width: RangeInclusive<usize>,
    range: RangeInclusive<u32>,
) -> impl Parser<'src, I, T, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
    T: TryFrom<u32>,
{
    digits(width).try_map(move |value, span| {
        range
            .contains(&value)
            .then_some(value)
            .and_then(|v| T::try_from(v).ok())
            .ok_or_else(|| E::Error::expected_found([ValueExpected::OutOfRange], None, span))
    })
}

/// ```txt
/// [plus / minus] magnitude
/// plus        = "+"
/// minus       = "-"
/// ```
pub fn signed<'src, I, E, T, P>(magnitude: P) -> impl Parser<'src, I, T, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    P: Parser<'src, I, T, E> + Clone,
    T: Neg<Output = T>,
{
    select! { c @ ('+' | '-') => c }
        .or_not()
        .then(magnitude)
        .map(|(sign, n)| if sign == Some('-') { -n } else { n })
}

/// One or more upper-case ASCII letters, e.g. a keyword value like `WEEKLY`.
pub fn upper_word<'src, I, E>() -> impl Parser<'src, I, String, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ 'A'..='Z' => c }
        .repeated()
        .at_least(1)
        .collect::<String>()
}
