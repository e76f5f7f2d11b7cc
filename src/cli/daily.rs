//! Daily fractals command.

use anyhow::{Context, Result};
use clap::Parser;

use super::ApiArgs;
use crate::fractals::{scale_table, DailyResolver};
use crate::gw2::Gw2ApiClient;

/// Prints today's daily fractals and recommended scales.
#[derive(Parser)]
pub struct DailyCommand {
    /// API options.
    #[command(flatten)]
    pub api: ApiArgs,
}

impl DailyCommand {
    /// Executes the daily command.
    pub async fn execute(self) -> Result<()> {
        let config = self.api.resolve()?;
        let client = Gw2ApiClient::from_config(&config)?;

        let sentence = DailyResolver::new(&client, scale_table())
            .concurrent(config.concurrent_lookups)
            .resolve_daily_challenges()
            .await
            .context("Failed to resolve today's daily fractals")?;

        println!("{sentence}");
        Ok(())
    }
}
