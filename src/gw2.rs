//! Guild Wars 2 API access.

pub mod client;
#[cfg(test)]
pub(crate) mod test_utils;

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use serde::Deserialize;

pub use client::{Gw2ApiClient, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};

/// An achievement as returned by `/v2/achievements/{id}`.
///
/// Only the fields the skill depends on are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Achievement {
    /// Achievement identifier.
    pub id: u32,
    /// Display name, e.g. `"Daily Tier 4 Swampland"`.
    pub name: String,
}

/// Boxed future returned by [`AchievementSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Trait for sources of daily achievement data.
pub trait AchievementSource: Send + Sync {
    /// Returns the ids of today's featured fractal achievements, in API order.
    fn daily_fractal_ids(&self) -> SourceFuture<'_, Vec<u32>>;

    /// Returns a single achievement by id.
    fn achievement(&self, id: u32) -> SourceFuture<'_, Achievement>;
}
