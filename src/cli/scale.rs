//! Fractal scale lookup command.

use anyhow::Result;
use clap::Parser;

use crate::fractals::resolve_scale;

/// Looks up the fractal at a difficulty scale.
#[derive(Parser)]
pub struct ScaleCommand {
    /// Difficulty scale, 0 to 100.
    #[arg(value_name = "SCALE", allow_hyphen_values = true)]
    pub scale: String,

    /// Prints only the fractal name, or "Unknown".
    #[arg(long)]
    pub terse: bool,
}

impl ScaleCommand {
    /// Executes the scale command.
    pub fn execute(self) -> Result<()> {
        let lookup = resolve_scale(&self.scale);
        if self.terse {
            println!("{lookup}");
        } else {
            println!("{}", lookup.verbose());
        }
        Ok(())
    }
}
