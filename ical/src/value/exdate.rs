// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value list of the EXDATE property, RFC 5545 Section 3.8.5.1.

use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::keyword::{KW_RRULE_PART_SEPARATOR, KW_VALUE_SEPARATOR};
use crate::value::datetime::{ValueDateOrDateTime, value_date_or_date_time};
use crate::value::miscellaneous::ValueExpected;

/// Format Definition:
///
/// ```txt
/// exdate     = "EXDATE" exdtparam ":" exdtval *("," exdtval) CRLF
/// exdtval    = date-time / date
/// ;Value MUST match value type
/// ```
///
/// Only the value list is parsed. All values must share one value type, so a
/// list is either all DATE or all DATE-TIME. Stored lists written with a
/// SEMICOLON between values are accepted as well.
pub fn values_exdate<'src, I, E>() -> impl Parser<'src, I, Vec<ValueDateOrDateTime>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date_or_date_time()
        .separated_by(just(KW_VALUE_SEPARATOR).or(just(KW_RRULE_PART_SEPARATOR)))
        .at_least(1)
        .collect::<Vec<_>>()
        .try_map(|values, span| {
            let is_date = |v: &ValueDateOrDateTime| matches!(v, ValueDateOrDateTime::Date(_));
            let all_day = values.first().is_some_and(is_date);
            if values.iter().all(|v| is_date(v) == all_day) {
                Ok(values)
            } else {
                Err(E::Error::expected_found(
                    [ValueExpected::MixedDateKinds],
                    None,
                    span,
                ))
            }
        })
}
