// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of kalendar.

mod cli;
mod cmd_classify;
mod cmd_day;
mod cmd_exdate;
mod cmd_generate_completion;
mod cmd_rule;
mod cmd_token;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
