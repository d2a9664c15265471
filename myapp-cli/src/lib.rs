// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

pub const GREETING: &str = "Hello, CLI!";

/// The root command. It registers no subcommands, so a bare invocation
/// always runs the default action.
#[derive(Parser, Debug)]
#[command(name = "myapp")]
#[command(about = "A CLI application")]
#[command(version)]
pub struct Cli {}

/// The default action: exactly one line on `out`.
pub fn run_default<W: Write>(out: &mut W) -> io::Result<()> {
    debug!("running default action");
    writeln!(out, "{GREETING}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn default_action_writes_one_line() {
        let mut buf = Vec::new();
        run_default(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello, CLI!\n");
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "myapp");
        assert_eq!(cmd.get_subcommands().count(), 0);
    }

    #[test]
    fn bare_invocation_parses_and_extra_args_are_rejected() {
        assert!(Cli::try_parse_from(["myapp"]).is_ok());
        assert!(Cli::try_parse_from(["myapp", "serve"]).is_err());
        assert!(Cli::try_parse_from(["myapp", "--verbose"]).is_err());
    }
}
