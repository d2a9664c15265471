// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use anyhow::{Context, Result};
use clap::Parser;
use myapp_cli::{run_default, Cli};
use myapp_core::{init_logging, LogFormat};

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Quiet unless RUST_LOG asks for more; stdout belongs to the greeting.
    init_logging("myapp", LogFormat::Text, "warn");

    let stdout = std::io::stdout();
    run_default(&mut stdout.lock()).context("failed to write to stdout")
}
