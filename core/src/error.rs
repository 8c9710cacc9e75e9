// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Which stored text a [`Error::MalformedRule`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A recurrence rule, e.g. `FREQ=WEEKLY`.
    RecurrenceRule,

    /// An exception date list, e.g. `20240305,20240312`.
    ExceptionDates,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecurrenceRule => write!(f, "recurrence rule"),
            Self::ExceptionDates => write!(f, "recurrence exception dates"),
        }
    }
}

/// Errors of the recurrence core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stored text does not follow the expected grammar.
    #[error("malformed {kind} '{text}': {reason}")]
    MalformedRule {
        /// What the text was supposed to be
        kind: RuleKind,
        /// The offending text
        text: String,
        /// Why it was rejected
        reason: String,
    },

    /// A date cannot be rendered as a compact date token.
    #[error("cannot format date: {0}")]
    Formatting(String),

    /// A date or time could not be constructed.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] jiff::Error),

    /// A locale tag that cannot be understood.
    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    /// The configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn malformed(kind: RuleKind, text: &str, errs: &[kalendar_ical::ParseError]) -> Self {
        let reason = errs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Self::MalformedRule {
            kind,
            text: text.to_owned(),
            reason,
        }
    }
}
