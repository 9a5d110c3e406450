//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::render::OutputFormat;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Equipment id (e.g. HHP-450)
    pub equipment: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expand every category
    #[arg(short, long)]
    pub expand_all: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Ask command arguments.
#[derive(Debug, Args)]
pub struct AskCommand {
    /// Equipment to ask about
    #[arg(short, long)]
    pub equipment: Option<String>,

    /// The command text, e.g. "show me the maintenance schedule"
    #[arg(required = true, num_args = 1..)]
    pub command: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expand every category
    #[arg(long)]
    pub expand_all: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl AskCommand {
    /// The command words joined back into one phrase.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.command.join(" ")
    }
}

/// Page command arguments.
#[derive(Debug, Args)]
pub struct PageCommand {
    /// Equipment to select before rendering
    #[arg(short, long)]
    pub equipment: Option<String>,

    /// Command to submit after selecting; without it the full record is fetched
    #[arg(long)]
    pub command: Option<String>,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Session command arguments.
#[derive(Debug, Args)]
pub struct SessionCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_phrase_joins_words() {
        let cmd = AskCommand {
            equipment: Some("HHP-450".to_string()),
            command: vec!["error".to_string(), "code".to_string(), "12".to_string()],
            format: None,
            expand_all: false,
            output: None,
        };
        assert_eq!(cmd.phrase(), "error code 12");
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            equipment: "IW-80".to_string(),
            format: Some(OutputFormat::Html),
            expand_all: true,
            output: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("IW-80"));
        assert!(debug_str.contains("Html"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
