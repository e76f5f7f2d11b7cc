//! Shared test utilities for the `gw2` module.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{Achievement, AchievementSource, SourceFuture};

/// In-memory achievement source with canned names.
///
/// Achievement ids are assigned from 1 in the order names are given.
/// Every id looked up is recorded so tests can check which calls were made
/// after the source has been handed to a resolver or handler.
pub(crate) struct MockAchievementSource {
    daily_ids: Vec<u32>,
    names: HashMap<u32, String>,
    fail_daily: bool,
    failing_ids: HashSet<u32>,
    requested: Arc<Mutex<Vec<u32>>>,
}

impl MockAchievementSource {
    /// Creates a source whose daily list is `names`, in order.
    pub(crate) fn with_names(names: &[&str]) -> Self {
        let daily_ids: Vec<u32> = (1..).take(names.len()).collect();
        let names = daily_ids
            .iter()
            .zip(names)
            .map(|(id, name)| (*id, (*name).to_string()))
            .collect();
        Self {
            daily_ids,
            names,
            fail_daily: false,
            failing_ids: HashSet::new(),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a source whose daily list request fails.
    pub(crate) fn unavailable() -> Self {
        Self {
            fail_daily: true,
            ..Self::with_names(&[])
        }
    }

    /// Makes the lookup of a single achievement fail.
    pub(crate) fn failing_on(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Returns a handle to the ids looked up so far.
    pub(crate) fn requested_handle(&self) -> Arc<Mutex<Vec<u32>>> {
        self.requested.clone()
    }
}

impl AchievementSource for MockAchievementSource {
    fn daily_fractal_ids(&self) -> SourceFuture<'_, Vec<u32>> {
        Box::pin(async move {
            if self.fail_daily {
                return Err(anyhow::anyhow!("simulated network error"));
            }
            Ok(self.daily_ids.clone())
        })
    }

    fn achievement(&self, id: u32) -> SourceFuture<'_, Achievement> {
        Box::pin(async move {
            self.requested.lock().unwrap().push(id);
            if self.failing_ids.contains(&id) {
                return Err(anyhow::anyhow!("simulated failure for achievement {id}"));
            }
            self.names
                .get(&id)
                .map(|name| Achievement {
                    id,
                    name: name.clone(),
                })
                .ok_or_else(|| anyhow::anyhow!("no such achievement: {id}"))
        })
    }
}
