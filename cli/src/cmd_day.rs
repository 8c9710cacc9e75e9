// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use jiff::civil::Date;
use kalendar_core::{Kalendar, WeekOfYear, end_of_day};

use crate::util::{ArgOutputFormat, parse_date};

/// Show the boundaries and the week of a day.
#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub date: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show start, end, week number and local rendering of a day")
            .arg(arg!(date: [DATE] "The day, YYYY-MM-DD, defaults to today").value_parser(parse_date))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: matches.get_one::<Date>("date").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, kalendar: &Kalendar) -> Result<(), Box<dyn Error>> {
        #[derive(Debug, serde::Serialize)]
        struct Day {
            start: String,
            end: String,
            week: WeekOfYear,
            locale: String,
            start_short: String,
            end_time_short: String,
        }

        tracing::debug!(?self, "computing day boundaries...");
        let start = match self.date {
            Some(date) => kalendar.make_date(date.year(), date.month(), date.day())?,
            None => kalendar
                .start_of_day_calendar(kalendar.locale())?
                .start()
                .clone(),
        };
        let end = end_of_day(&start)?;
        let week = kalendar.week_rules().week_of_year(start.date())?;

        let day = Day {
            start: start.to_string(),
            end: end.to_string(),
            week,
            locale: kalendar.locale().to_string(),
            start_short: kalendar.format_short_date_time(&start)?,
            end_time_short: kalendar.format_short_time(&end)?,
        };
        let plain = format!(
            "start: {}\nend:   {}\nweek:  {}\nlocal: {} - {} ({})",
            day.start, day.end, day.week, day.start_short, day.end_time_short, day.locale
        );
        self.output_format.print(&day, &plain)
    }
}
