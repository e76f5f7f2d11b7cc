//! CLI interface for mistlock-observatory.

mod config;
mod daily;
mod handle;
mod scale;

pub use config::{
    ConfigCommand, ConfigSubcommands, ScalesCommand, ScalesSubcommands, ShowCommand,
    ShowScalesCommand,
};
pub use daily::DailyCommand;
pub use handle::{render_response, HandleCommand};
pub use scale::ScaleCommand;

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::config::SkillConfig;

/// mistlock-observatory: Guild Wars 2 daily fractal skill.
#[derive(Parser)]
#[command(name = "mistlock-observatory")]
#[command(about = "Answers questions about Guild Wars 2 fractals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Prints today's daily fractals and recommended scales.
    Daily(DailyCommand),
    /// Looks up the fractal at a difficulty scale.
    Scale(ScaleCommand),
    /// Handles a voice platform event and prints the response envelope.
    Handle(HandleCommand),
    /// Configuration and bundled data.
    Config(ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Daily(daily_cmd) => daily_cmd.execute().await,
            Commands::Scale(scale_cmd) => scale_cmd.execute(),
            Commands::Handle(handle_cmd) => handle_cmd.execute().await,
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}

/// Options for commands that talk to the Guild Wars 2 API.
#[derive(Args, Debug, Default)]
pub struct ApiArgs {
    /// Guild Wars 2 API root (overrides GW2_API_BASE).
    #[arg(long, value_name = "URL")]
    pub api_base: Option<Url>,

    /// Per-request timeout in seconds (overrides MISTLOCK_REQUEST_TIMEOUT_SECS).
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Looks up achievement names one at a time instead of concurrently.
    #[arg(long)]
    pub sequential: bool,
}

impl ApiArgs {
    /// Resolves configuration from the environment, then applies these flags.
    pub fn resolve(&self) -> Result<SkillConfig> {
        let mut config = SkillConfig::from_env()?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut SkillConfig) {
        if let Some(ref base) = self.api_base {
            config.api_base = base.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if self.sequential {
            config.concurrent_lookups = false;
        }
    }
}
