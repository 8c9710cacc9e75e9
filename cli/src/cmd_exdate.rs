// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use jiff::civil::Date;
use kalendar_core::{Kalendar, format_exception_dates};

use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdExdateParse {
    pub text: String,
    pub strict: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdExdateParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse an exception date list, e.g. 20240305,20240312")
            .arg(arg!(text: <TEXT> "The exception date list"))
            .arg(arg!(--strict "Fail on malformed lists instead of printing nothing"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: matches
                .get_one::<String>("text")
                .cloned()
                .unwrap_or_default(),
            strict: matches.get_flag("strict"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, kalendar: &Kalendar) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing exception dates...");
        let dates = if self.strict {
            kalendar.try_parse_exception_dates(&self.text)?
        } else {
            kalendar.parse_exception_dates(Some(self.text.as_str()))
        };

        let dates: Vec<_> = dates.iter().map(ToString::to_string).collect();
        self.output_format.print(&dates, &dates.join("\n"))
    }
}

#[derive(Debug, Clone)]
pub struct CmdExdateFormat {
    pub dates: Vec<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdExdateFormat {
    pub const NAME: &str = "format";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Format dates as an exception date list")
            .arg(
                arg!(dates: <DATE> ... "The excluded dates, YYYY-MM-DD")
                    .value_parser(parse_date),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            dates: matches
                .get_many::<Date>("dates")
                .map(|dates| dates.copied().collect())
                .unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting exception dates...");
        let text = format_exception_dates(Some(self.dates.as_slice()));
        self.output_format
            .print(&text, text.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_exdate_parse() {
        let cmd = Command::new("test").subcommand(CmdExdateParse::command());
        let matches = cmd
            .try_get_matches_from(["test", "parse", "20240305,20240312"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("parse").unwrap();
        let parsed = CmdExdateParse::from(sub_matches);
        assert_eq!(parsed.text, "20240305,20240312");
        assert!(!parsed.strict);
    }

    #[test]
    fn test_parse_exdate_format() {
        let cmd = Command::new("test").subcommand(CmdExdateFormat::command());
        let matches = cmd
            .try_get_matches_from([
                "test",
                "format",
                "2024-03-05",
                "2024-03-12",
                "--output-format",
                "json",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("format").unwrap();
        let parsed = CmdExdateFormat::from(sub_matches);
        assert_eq!(parsed.dates, vec![date(2024, 3, 5), date(2024, 3, 12)]);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn test_parse_exdate_format_rejects_invalid_date() {
        let cmd = Command::new("test").subcommand(CmdExdateFormat::command());
        let result = cmd.try_get_matches_from(["test", "format", "2024-02-30"]);
        assert!(result.is_err());
    }
}
