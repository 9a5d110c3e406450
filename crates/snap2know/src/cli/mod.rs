//! Command-line interface for snap2know.
//!
//! This module provides the CLI structure for the `snap2know` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AskCommand, ConfigCommand, ListCommand, PageCommand, SessionCommand, ShowCommand,
};

/// snap2know - Equipment safety, maintenance and troubleshooting at a glance
///
/// Select a machine, then ask for what you need: "start", "maintenance",
/// "troubleshoot", "error code 12" or "safety".
#[derive(Debug, Parser)]
#[command(name = "snap2know")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available equipment
    List(ListCommand),

    /// Show everything known about one piece of equipment
    Show(ShowCommand),

    /// Ask a free-text question about equipment
    Ask(AskCommand),

    /// Render the full application page as standalone HTML
    Page(PageCommand),

    /// Start an interactive session
    Session(SessionCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::List(ListCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "snap2know");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["snap2know", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true })));
    }

    #[test]
    fn test_parse_show_with_format() {
        let cli =
            Cli::try_parse_from(["snap2know", "show", "HHP-450", "--format", "html"]).unwrap();
        match cli.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.equipment, "HHP-450");
                assert_eq!(cmd.format, Some(OutputFormat::Html));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_ask_multiword() {
        let cli = Cli::try_parse_from([
            "snap2know", "ask", "-e", "HHP-450", "error", "code", "12",
        ])
        .unwrap();
        match cli.command {
            Command::Ask(cmd) => {
                assert_eq!(cmd.equipment.as_deref(), Some("HHP-450"));
                assert_eq!(cmd.phrase(), "error code 12");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_ask_requires_command() {
        assert!(Cli::try_parse_from(["snap2know", "ask"]).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["snap2know", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_session() {
        let cli = Cli::try_parse_from(["snap2know", "-q", "session"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Session(_)));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["snap2know", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: None })
        ));
    }
}
