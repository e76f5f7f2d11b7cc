//! Voice platform event handling command.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::ApiArgs;
use crate::fractals::scale_table;
use crate::gw2::Gw2ApiClient;
use crate::skill::{SkillEvent, SkillHandler};

/// Handles a voice platform event and prints the response envelope.
#[derive(Parser)]
pub struct HandleCommand {
    /// Event JSON file; reads stdin when omitted.
    #[arg(long, value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// API options.
    #[command(flatten)]
    pub api: ApiArgs,
}

impl HandleCommand {
    /// Executes the handle command.
    pub async fn execute(self) -> Result<()> {
        let input = match self.event {
            Some(ref path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read event file: {}", path.display()))?,
            None => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read event from stdin")?;
                input
            }
        };

        let config = self.api.resolve()?;
        let client = Gw2ApiClient::from_config(&config)?;
        let handler =
            SkillHandler::new(&client, scale_table()).concurrent(config.concurrent_lookups);

        println!("{}", render_response(&handler, &input).await?);
        Ok(())
    }
}

/// Parses an event, handles it and renders the envelope as pretty JSON.
///
/// Events that need no response body render as `null`.
pub async fn render_response(handler: &SkillHandler<'_>, input: &str) -> Result<String> {
    let event: SkillEvent = serde_json::from_str(input).context("Failed to parse skill event")?;
    let response = handler.handle(&event).await?;
    serde_json::to_string_pretty(&response).context("Failed to serialize response")
}
