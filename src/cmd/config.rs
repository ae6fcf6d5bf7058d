use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use clientlib::config::{self, Configuration};

/// Clientlib config controls.
#[derive(Clone, Debug, Args)]
#[command(name = "config")]
pub struct Config {
    #[command(subcommand)]
    action: ConfigSubcommands,
}

impl Config {
    #[tracing::instrument(level = "trace", skip(self, config))]
    pub fn run(self, config: Option<PathBuf>) -> Result<()> {
        match self.action {
            ConfigSubcommands::Show => {
                let cfg = config::load(config)?;
                println!("{:#?}", cfg);
            }
            ConfigSubcommands::Schema => {
                let schema = schemars::schema_for!(Configuration);
                let schema =
                    serde_json::to_string_pretty(&schema).context("error rendering schema")?;
                println!("{schema}");
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Subcommand)]
enum ConfigSubcommands {
    /// Show the loaded configuration.
    Show,
    /// Print the JSON schema of the configuration file.
    Schema,
}
