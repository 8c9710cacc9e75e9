// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use kalendar_core::{APP_NAME, Kalendar};
use tracing_subscriber::EnvFilter;

use crate::cmd_classify::CmdClassify;
use crate::cmd_day::CmdDay;
use crate::cmd_exdate::{CmdExdateFormat, CmdExdateParse};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_rule::CmdRule;
use crate::cmd_token::CmdToken;
use crate::config::parse_config;

/// Run the kalendar command-line interface.
pub async fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Normalize recurrence rules and exception dates of calendar events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $KALENDAR_CONFIG, then \
$XDG_CONFIG_HOME/kalendar/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/kalendar/config.toml on Windows.",
                    )
                    .global(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdClassify::command())
            .subcommand(
                Command::new("exdate")
                    .about("Parse and format exception date lists")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdExdateParse::command())
                    .subcommand(CmdExdateFormat::command()),
            )
            .subcommand(CmdToken::command())
            .subcommand(CmdRule::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdClassify::NAME, matches)) => Classify(CmdClassify::from(matches)),
            Some(("exdate", matches)) => match matches.subcommand() {
                Some((CmdExdateParse::NAME, matches)) => ExdateParse(CmdExdateParse::from(matches)),
                Some((CmdExdateFormat::NAME, matches)) => {
                    ExdateFormat(CmdExdateFormat::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdToken::NAME, matches)) => Token(CmdToken::from(matches)),
            Some((CmdRule::NAME, matches)) => Rule(CmdRule::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Classify a recurrence rule
    Classify(CmdClassify),

    /// Parse an exception date list
    ExdateParse(CmdExdateParse),

    /// Format an exception date list
    ExdateFormat(CmdExdateFormat),

    /// Format a compact date token
    Token(CmdToken),

    /// Print the canonical rule of a category
    Rule(CmdRule),

    /// Show the boundaries of a day
    Day(CmdDay),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Classify(a)           => a.run(),
            ExdateParse(a)        => a.run(&Self::kalendar(config).await?),
            ExdateFormat(a)       => a.run(),
            Token(a)              => a.run(),
            Rule(a)               => a.run(),
            Day(a)                => a.run(&Self::kalendar(config).await?),
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn kalendar(config: Option<PathBuf>) -> Result<Kalendar, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        Ok(Kalendar::new(&config)?)
    }
}

#[cfg(test)]
mod tests {
    use kalendar_core::RecurrenceCategory;

    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::ArgOutputFormat;

    #[test]
    fn test_parse_config() {
        let args = ["test", "-c", "/tmp/config.toml", "classify", "FREQ=DAILY"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Classify(_)));
    }

    #[test]
    fn test_parse_config_after_subcommand() {
        let args = ["test", "day", "--config", "/tmp/config.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Day(_)));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["test"]).is_err());
        assert!(Cli::try_parse_from(["test", "exdate"]).is_err());
    }

    #[test]
    fn test_parse_classify() {
        let args = ["test", "classify", "FREQ=WEEKLY", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Classify(cmd) => {
                assert_eq!(cmd.rule, "FREQ=WEEKLY");
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_parse_exdate_parse() {
        let cli = Cli::try_parse_from(["test", "exdate", "parse", "20240305"]).unwrap();
        match cli.command {
            Commands::ExdateParse(cmd) => assert_eq!(cmd.text, "20240305"),
            _ => panic!("Expected ExdateParse command"),
        }
    }

    #[test]
    fn test_parse_exdate_format() {
        let cli = Cli::try_parse_from(["test", "exdate", "format", "2024-03-05"]).unwrap();
        match cli.command {
            Commands::ExdateFormat(cmd) => assert_eq!(cmd.dates.len(), 1),
            _ => panic!("Expected ExdateFormat command"),
        }
    }

    #[test]
    fn test_parse_token() {
        let cli = Cli::try_parse_from(["test", "token", "2024-03-05", "--all-day"]).unwrap();
        match cli.command {
            Commands::Token(cmd) => assert!(cmd.all_day),
            _ => panic!("Expected Token command"),
        }
    }

    #[test]
    fn test_parse_rule() {
        let cli = Cli::try_parse_from(["test", "rule", "workdaily"]).unwrap();
        match cli.command {
            Commands::Rule(cmd) => assert_eq!(cmd.category, RecurrenceCategory::Workdaily),
            _ => panic!("Expected Rule command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let cli = Cli::try_parse_from(["test", "generate-completion", "zsh"]).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => assert_eq!(cmd.shell, Shell::Zsh),
            _ => panic!("Expected GenerateCompletion command"),
        }
    }

    #[tokio::test]
    async fn test_run_without_config() {
        let cli = Cli::try_parse_from(["test", "rule", "biweekly"]).unwrap();
        cli.run().await.unwrap();
    }
}
