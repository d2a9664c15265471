// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use anyhow::{Context, Result};
use clap::Parser;
use kube::ResourceExt;
use myapp_cluster::list_pods;
use myapp_core::{init_logging, Settings};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pod-list")]
#[command(about = "List the pods of one namespace using ambient cluster credentials")]
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
        .cluster
        .validate()
        .context("invalid cluster configuration")?;
    init_logging("pod-list", settings.log.format, "info");

    let pods = list_pods(&settings.cluster)
        .await
        .context("pod listing failed")?;

    let mut out = std::io::stdout().lock();
    for pod in &pods {
        writeln!(out, "{}", pod.name_any())?;
    }
    out.flush()?;
    Ok(())
}
