//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Run Fatture in Cloud operations as declarative batches
#[derive(Debug, Parser)]
#[command(name = "ficbridge", version, about)]
pub struct Cli {
    /// Config file (JSON or TOML); defaults to environment then probed files
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List resources and their operations
    Resources,

    /// Print the compiled field schema as JSON
    Describe {
        /// Only fields shown for this resource
        #[arg(long)]
        resource: Option<String>,
    },

    /// Execute a batch file and print the result envelopes as JSON
    Run {
        /// Batch request JSON file
        #[arg(long, value_name = "FILE")]
        batch: PathBuf,

        /// Credentials JSON file; `FIC_ACCESS_TOKEN` is used when omitted
        #[arg(long, value_name = "FILE")]
        credentials: Option<PathBuf>,

        /// Report failing items and keep going instead of stopping
        #[arg(long)]
        continue_on_fail: bool,
    },

    /// Print the OAuth2 settings for the credential manager
    Oauth,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_flags() {
        let cli = Cli::parse_from([
            "ficbridge",
            "run",
            "--batch",
            "batch.json",
            "--continue-on-fail",
            "--config",
            "ficbridge.toml",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("ficbridge.toml")));
        match cli.command {
            Command::Run { batch, credentials, continue_on_fail } => {
                assert_eq!(batch, PathBuf::from("batch.json"));
                assert_eq!(credentials, None);
                assert!(continue_on_fail);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }
}
