// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use crate::config::LogFormat;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Events go to stderr so stdout stays free
/// for program output. `RUST_LOG` overrides `default_level`.
pub fn init_logging(app_name: &str, format: LogFormat, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .json(),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init(),
    }

    info!(
        app = app_name,
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );
}

/// Runs `$call`, then logs its outcome with how long it took. The result is
/// passed through unchanged, so `?` still applies at the call site.
#[macro_export]
macro_rules! log_operation {
    ($op:expr, $call:expr) => {{
        let started = ::std::time::Instant::now();
        let result = $call;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => $crate::tracing::info!(operation = $op, elapsed_ms, "ok"),
            Err(e) => $crate::tracing::error!(operation = $op, elapsed_ms, error = %e, "failed"),
        }
        result
    }};
}
