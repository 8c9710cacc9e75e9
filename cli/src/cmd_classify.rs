// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use kalendar_core::{RecurrenceCategory, classify, try_classify};

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdClassify {
    pub rule: String,
    pub strict: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdClassify {
    pub const NAME: &str = "classify";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Classify a recurrence rule into a recurrence category")
            .arg(arg!(rule: <RULE> "The recurrence rule, e.g. FREQ=WEEKLY;INTERVAL=2"))
            .arg(arg!(--strict "Fail on malformed rules instead of printing nothing"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: matches
                .get_one::<String>("rule")
                .cloned()
                .unwrap_or_default(),
            strict: matches.get_flag("strict"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "classifying recurrence rule...");
        let category = if self.strict {
            Some(try_classify(&self.rule)?)
        } else {
            classify(Some(self.rule.as_str()))
        };
        print_category(self.output_format, &self.rule, category)
    }
}

fn print_category(
    format: ArgOutputFormat,
    rule: &str,
    category: Option<RecurrenceCategory>,
) -> Result<(), Box<dyn Error>> {
    #[derive(serde::Serialize)]
    struct Classified<'a> {
        rule: &'a str,
        category: Option<RecurrenceCategory>,
    }

    let plain = category.map(RecurrenceCategory::as_str).unwrap_or_default();
    format.print(&Classified { rule, category }, plain)
}
