//! Configuration-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::SkillConfig;
use crate::fractals::FRACTAL_DATA_JSON;

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Fractal scale table operations.
    Scales(ScalesCommand),
    /// Shows the configuration resolved from the environment and settings file.
    Show(ShowCommand),
}

/// Scales operations.
#[derive(Parser)]
pub struct ScalesCommand {
    /// Scales subcommand to execute.
    #[command(subcommand)]
    pub command: ScalesSubcommands,
}

/// Scales subcommands.
#[derive(Subcommand)]
pub enum ScalesSubcommands {
    /// Shows the embedded fractal_data.json table.
    Show(ShowScalesCommand),
}

/// Show scales command options.
#[derive(Parser)]
pub struct ShowScalesCommand {}

/// Show configuration command options.
#[derive(Parser)]
pub struct ShowCommand {}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Scales(scales_cmd) => scales_cmd.execute(),
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ScalesCommand {
    /// Executes the scales command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ScalesSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowScalesCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        print!("{FRACTAL_DATA_JSON}");
        Ok(())
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let config = SkillConfig::from_env()?;
        println!("api_base: {}", config.api_base);
        println!("request_timeout_secs: {}", config.request_timeout.as_secs());
        println!("concurrent_lookups: {}", config.concurrent_lookups);
        Ok(())
    }
}
