// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use jiff::civil::Date;
use kalendar_core::RecurrenceCategory;

use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdRule {
    pub category: RecurrenceCategory,
    pub until: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdRule {
    pub const NAME: &str = "rule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the canonical recurrence rule of a category")
            .arg(
                arg!(category: <CATEGORY> "The recurrence category")
                    .value_parser(value_parser!(RecurrenceCategory)),
            )
            .arg(
                arg!(--until <DATE> "Last day of the recurrence, YYYY-MM-DD")
                    .value_parser(parse_date),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<RecurrenceCategory>("category") {
            Some(category) => Self {
                category: *category,
                until: matches.get_one::<Date>("until").copied(),
                output_format: ArgOutputFormat::from(matches),
            },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "building recurrence rule...");
        let rule = self.category.to_rule(self.until).to_string();
        self.output_format.print(&rule, &rule)
    }
}
