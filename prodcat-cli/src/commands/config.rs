//! Configuration management command

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use prodcat_core::AppConfig;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

/// Run the config command
pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Init => {
            let path = AppConfig::config_path();
            if path.exists() {
                bail!("Config already exists at {}", path.display());
            }
            AppConfig::default()
                .save()
                .context("Failed to write config file")?;
            println!("Wrote {}", path.display());
        }
        ConfigCommand::Path => {
            println!("{}", AppConfig::config_path().display());
        }
        ConfigCommand::Show => {
            let config = AppConfig::load().context("Failed to load configuration")?;
            let toml_str =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            print!("{toml_str}");
        }
    }
    Ok(())
}
