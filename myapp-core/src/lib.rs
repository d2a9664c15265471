// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ClusterSettings, DatabaseSettings, LogFormat, LogSettings, Settings};
pub use error::ConfigError;
pub use logging::init_logging;

// Used by `log_operation!` so callers don't need their own `tracing` import.
#[doc(hidden)]
pub use tracing;
