//! # mistlock-observatory
//!
//! A voice skill handler answering questions about Guild Wars 2 fractals.
//!
//! ## Features
//!
//! - Today's daily fractals and recommended scales from the Guild Wars 2 API
//! - Fractal lookup by difficulty scale from a bundled table
//! - Voice platform request routing and response envelopes
//!
//! ## Quick Start
//!
//! ```rust
//! use mistlock_observatory::fractals::resolve_scale;
//!
//! println!("{}", resolve_scale("56").verbose());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fractals;
pub mod gw2;
pub mod skill;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::error::SkillError;

/// The current version of mistlock-observatory.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
