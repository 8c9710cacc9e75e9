// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! kalendar - normalize recurrence rules and exception dates

use std::process::ExitCode;

use kalendar_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
