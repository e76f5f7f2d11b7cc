//! Daily fractal resolution.
//!
//! Today's fractal dailies come from the achievement API as names such as
//! `"Daily Tier 4 Swampland"` or `"Daily Recommended Scale 56"`.
//! Tiered names collapse to the fractal they refer to and recommended names
//! contribute their trailing scale number.

use anyhow::Result;
use futures::future::try_join_all;
use tracing::debug;

use super::format::join_spoken_list;
use super::scales::ScaleTable;
use crate::error::SkillError;
use crate::gw2::{Achievement, AchievementSource};

/// Classified daily fractals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyFractals {
    challenges: Vec<String>,
    recommended_scales: Vec<String>,
}

impl DailyFractals {
    /// Prefix identifying a recommended-scale daily.
    pub const RECOMMENDED_PREFIX: &'static str = "Daily Recommended";

    /// Prefix stripped from tiered dailies.
    pub const TIER_PREFIX: &'static str = "Daily Tier ";

    /// Classifies achievement names in fetch order.
    pub fn from_names<'n, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut dailies = Self::default();
        for name in names {
            dailies.classify(name);
        }
        dailies
    }

    /// Classifies a single achievement name.
    pub fn classify(&mut self, name: &str) {
        if name.starts_with(Self::RECOMMENDED_PREFIX) {
            if let Some(scale) = name.split_whitespace().last() {
                self.recommended_scales.push(scale.to_string());
            }
            return;
        }

        let stripped = name.strip_prefix(Self::TIER_PREFIX).unwrap_or(name);
        let challenge: String = stripped.chars().filter(|c| !c.is_numeric()).collect();
        let challenge = challenge.trim();

        if challenge.is_empty() {
            debug!(name, "Ignoring daily with no fractal name");
            return;
        }
        if !self.challenges.iter().any(|c| c == challenge) {
            self.challenges.push(challenge.to_string());
        }
    }

    /// Distinct challenge names in first-seen order.
    pub fn challenges(&self) -> &[String] {
        &self.challenges
    }

    /// Recommended scales as fetched, duplicates included.
    pub fn recommended_scales(&self) -> &[String] {
        &self.recommended_scales
    }

    /// Renders the spoken answer, naming each recommended scale's fractal.
    pub fn render(&self, scales: &ScaleTable) -> String {
        let challenges = if self.challenges.is_empty() {
            "There are no daily fractals today.".to_string()
        } else {
            format!(
                "Today's daily fractals are {}.",
                join_spoken_list(&self.challenges)
            )
        };

        let recommendations: Vec<String> = self
            .recommended_scales
            .iter()
            .map(|scale| format!("{scale} {}", scales.resolve(scale).terse()))
            .collect();
        let recommendations = if recommendations.is_empty() {
            "There are no recommended fractal scales today.".to_string()
        } else {
            format!(
                "Today's recommended fractal scales are {}.",
                join_spoken_list(&recommendations)
            )
        };

        format!("{challenges} {recommendations}")
    }
}

/// Fetches and renders today's fractal dailies.
pub struct DailyResolver<'a> {
    source: &'a dyn AchievementSource,
    scales: &'a ScaleTable,
    concurrent: bool,
}

impl<'a> DailyResolver<'a> {
    /// Creates a resolver that looks up achievement names concurrently.
    pub fn new(source: &'a dyn AchievementSource, scales: &'a ScaleTable) -> Self {
        Self {
            source,
            scales,
            concurrent: true,
        }
    }

    /// Chooses between concurrent and strictly sequential name lookups.
    #[must_use]
    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Fetches and classifies today's dailies.
    pub async fn fetch(&self) -> Result<DailyFractals, SkillError> {
        let ids = self
            .source
            .daily_fractal_ids()
            .await
            .map_err(SkillError::remote)?;

        debug!(
            count = ids.len(),
            concurrent = self.concurrent,
            "Resolving daily fractal achievements"
        );

        let achievements = if self.concurrent {
            try_join_all(ids.iter().map(|id| self.source.achievement(*id))).await
        } else {
            self.fetch_sequential(&ids).await
        }
        .map_err(SkillError::remote)?;

        Ok(DailyFractals::from_names(
            achievements.iter().map(|a| a.name.as_str()),
        ))
    }

    /// Returns the ready-to-speak daily fractal sentence.
    pub async fn resolve_daily_challenges(&self) -> Result<String, SkillError> {
        Ok(self.fetch().await?.render(self.scales))
    }

    async fn fetch_sequential(&self, ids: &[u32]) -> Result<Vec<Achievement>> {
        let mut achievements = Vec::with_capacity(ids.len());
        for id in ids {
            achievements.push(self.source.achievement(*id).await?);
        }
        Ok(achievements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractals::scales::scale_table;
    use crate::gw2::test_utils::MockAchievementSource;

    fn test_table() -> ScaleTable {
        ScaleTable::from_json(
            r#"{"Aetherblade": [20], "Molten Furnace": [56], "Swampland": [5, 17]}"#,
        )
        .unwrap()
    }

    #[test]
    fn tiered_names_collapse_to_fractal() {
        let dailies = DailyFractals::from_names([
            "Daily Tier 3 Cliffside",
            "Daily Tier 4 Cliffside",
            "Daily Tier 3 Cliffside",
        ]);
        assert_eq!(dailies.challenges(), ["Cliffside"]);
    }

    #[test]
    fn challenges_keep_first_seen_order() {
        let dailies = DailyFractals::from_names([
            "Daily Tier 1 Swampland",
            "Daily Tier 1 Molten Boss",
            "Daily Tier 4 Swampland",
            "Daily Tier 4 Aetherblade",
        ]);
        assert_eq!(
            dailies.challenges(),
            ["Swampland", "Molten Boss", "Aetherblade"]
        );
    }

    #[test]
    fn recommended_scale_keeps_trailing_token() {
        let dailies = DailyFractals::from_names([
            "Daily Recommended Scale 56",
            "Daily Recommended Fractal—Scale 20",
            "Daily Recommended Scale 56",
        ]);
        assert_eq!(dailies.recommended_scales(), ["56", "20", "56"]);
        assert!(dailies.challenges().is_empty());
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        let dailies =
            DailyFractals::from_names(["Daily Tier \u{ff14} Swampland", "Swampland\u{b2}"]);
        assert_eq!(dailies.challenges(), ["Swampland"]);
    }

    #[test]
    fn names_without_tier_prefix_drop_digits() {
        let dailies = DailyFractals::from_names(["Nightmare 2", "Daily Tier 4"]);
        assert_eq!(dailies.challenges(), ["Nightmare"]);
    }

    #[test]
    fn render_names_recommended_fractals() {
        let dailies =
            DailyFractals::from_names(["Daily Tier 2 Swampland", "Daily Recommended Scale 56"]);
        assert_eq!(
            dailies.render(&test_table()),
            "Today's daily fractals are Swampland. \
             Today's recommended fractal scales are 56 Molten Furnace."
        );
    }

    #[test]
    fn render_unknown_scale() {
        let dailies = DailyFractals::from_names([
            "Daily Tier 2 Swampland",
            "Daily Tier 2 Chaos",
            "Daily Recommended Scale 99",
            "Daily Recommended Scale 20",
            "Daily Recommended Scale 5",
        ]);
        insta::assert_snapshot!(
            dailies.render(&test_table()),
            @"Today's daily fractals are Swampland and Chaos. Today's recommended fractal scales are 99 Unknown, 20 Aetherblade and 5 Swampland."
        );
    }

    #[test]
    fn render_empty() {
        assert_eq!(
            DailyFractals::default().render(&test_table()),
            "There are no daily fractals today. There are no recommended fractal scales today."
        );
    }

    #[tokio::test]
    async fn resolves_end_to_end() {
        let source =
            MockAchievementSource::with_names(&["Daily Tier 3 Swamp", "Daily Recommended Scale 20"]);
        let table = test_table();
        let sentence = DailyResolver::new(&source, &table)
            .resolve_daily_challenges()
            .await
            .unwrap();
        assert_eq!(
            sentence,
            "Today's daily fractals are Swamp. Today's recommended fractal scales are 20 Aetherblade."
        );
    }

    #[tokio::test]
    async fn sequential_and_concurrent_agree() {
        let names = [
            "Daily Tier 1 Uncategorized",
            "Daily Tier 2 Uncategorized",
            "Daily Tier 1 Snowblind",
            "Daily Tier 1 Thaumanova Reactor",
            "Daily Recommended Fractal—Scale 14",
            "Daily Recommended Fractal—Scale 66",
            "Daily Recommended Fractal—Scale 97",
        ];
        let source = MockAchievementSource::with_names(&names);
        let requested = source.requested_handle();
        let table = scale_table();

        let concurrent = DailyResolver::new(&source, table)
            .resolve_daily_challenges()
            .await
            .unwrap();
        let sequential = DailyResolver::new(&source, table)
            .concurrent(false)
            .resolve_daily_challenges()
            .await
            .unwrap();

        assert_eq!(concurrent, sequential);
        assert_eq!(
            sequential,
            "Today's daily fractals are Uncategorized, Snowblind and Thaumanova Reactor. \
             Today's recommended fractal scales are 14 Aetherblade, 66 Solid Ocean and 97 Captain Mai Trin Boss."
        );
        assert_eq!(requested.lock().unwrap().len(), names.len() * 2);
    }

    #[tokio::test]
    async fn daily_list_failure_is_remote_unavailable() {
        let source = MockAchievementSource::unavailable();
        let table = test_table();
        let err = DailyResolver::new(&source, &table)
            .resolve_daily_challenges()
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::RemoteUnavailable(ref msg) if msg.contains("simulated")));
    }

    #[tokio::test]
    async fn name_lookup_failure_is_remote_unavailable() {
        let table = test_table();
        for concurrent in [true, false] {
            let source = MockAchievementSource::with_names(&[
                "Daily Tier 1 Chaos",
                "Daily Tier 2 Chaos",
                "Daily Recommended Scale 20",
            ])
            .failing_on(2);
            let err = DailyResolver::new(&source, &table)
                .concurrent(concurrent)
                .resolve_daily_challenges()
                .await
                .unwrap_err();
            assert!(matches!(err, SkillError::RemoteUnavailable(_)));
        }
    }

    #[tokio::test]
    async fn sequential_mode_stops_at_first_failure() {
        let source = MockAchievementSource::with_names(&[
            "Daily Tier 1 Chaos",
            "Daily Tier 2 Chaos",
            "Daily Tier 3 Chaos",
        ])
        .failing_on(2);
        let requested = source.requested_handle();
        let table = test_table();
        let result = DailyResolver::new(&source, &table)
            .concurrent(false)
            .fetch()
            .await;
        assert!(result.is_err());
        assert_eq!(*requested.lock().unwrap(), vec![1, 2]);
    }
}
