// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use jiff::civil::DateTime;
use kalendar_core::format_recurrence_date;

use crate::util::{ArgOutputFormat, parse_datetime};

/// Print the compact token of a single occurrence date.
#[derive(Debug, Clone)]
pub struct CmdToken {
    pub date: DateTime,
    pub all_day: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdToken {
    pub const NAME: &str = "token";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Format a date as a compact date token")
            .arg(
                arg!(date: <DATE> "The date, YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]")
                    .value_parser(parse_datetime),
            )
            .arg(
                arg!(--"all-day" "Format as an all-day value")
                    .long_help("Format as an all-day value. Implied when DATE has no time."),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let (date, has_time) = matches
            .get_one::<(DateTime, bool)>("date")
            .copied()
            .unwrap_or_default();

        Self {
            date,
            all_day: matches.get_flag("all-day") || !has_time,
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting date token...");
        let token = format_recurrence_date(Some(self.date), self.all_day)
            .ok_or_else(|| format!("Cannot format {} as a date token", self.date))?;
        self.output_format.print(&token, &token)
    }
}
