// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::{Date, DateTime, Time};

const FORMAT_DATE: &str = "%Y-%m-%d";
const FORMATS_DATETIME: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Plain,
    Json,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("plain")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Plain)
    }

    /// Print `value` as pretty JSON, or `plain` in plain mode.
    pub fn print<T: serde::Serialize>(self, value: &T, plain: &str) -> Result<(), Box<dyn Error>> {
        match self {
            Self::Plain => println!("{plain}"),
            Self::Json => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }
}

/// Parse a calendar date, `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, String> {
    Date::strptime(FORMAT_DATE, s)
        .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}"))
}

/// Parse a date with optional time, `YYYY-MM-DD[ HH:MM[:SS]]`, returns whether
/// a time was given.
pub fn parse_datetime(s: &str) -> Result<(DateTime, bool), String> {
    if let Some(dt) = FORMATS_DATETIME
        .iter()
        .find_map(|fmt| DateTime::strptime(fmt, s).ok())
    {
        return Ok((dt, true));
    }

    match Date::strptime(FORMAT_DATE, s) {
        Ok(date) => Ok((date.to_datetime(Time::midnight()), false)),
        Err(_) => Err(format!(
            "Invalid date '{s}', expected YYYY-MM-DD, YYYY-MM-DD HH:MM or YYYY-MM-DDTHH:MM:SS"
        )),
    }
}
