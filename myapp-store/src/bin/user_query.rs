// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use anyhow::{Context, Result};
use clap::Parser;
use myapp_core::{init_logging, Settings};
use myapp_store::fetch_all_users;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "user-query")]
#[command(about = "Print every row of the users table as JSON lines")]
struct Args {
    /// TOML config file (defaults to $MYAPP_CONFIG, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("failed to load configuration")?;
    settings
        .database
        .validate()
        .context("invalid database configuration")?;
    init_logging("user-query", settings.log.format, "info");

    // Fatal on connect or query failure: nothing is printed unless the whole
    // result set was read.
    let users = fetch_all_users(&settings.database)
        .await
        .context("user query failed")?;

    let mut out = std::io::stdout().lock();
    for user in &users {
        serde_json::to_writer(&mut out, user)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
