//! Analytics engine facade
//!
//! Owns a shared snapshot and the configuration, exposes the ten analytical
//! operations, and can run the whole battery concurrently.

use crate::analytics::{
    self, AgeInfo, AnalyticsResult, BirthMonthInfo, EventStateInfo, FirstNameInfo, MatchPair,
    SiblingInfo, TaggedPhotoInfo, UserInfo, UsersPair,
};
use crate::config::EngineConfig;
use crate::dataset::{Dataset, DatasetResult};
use crate::snapshot::{SnapshotStore, UserId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::info;

/// Read-only analytics over one snapshot
///
/// Cloning is cheap: clones share the same snapshot, so an engine can be
/// handed to any number of worker threads.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    snapshot: Arc<SnapshotStore>,
    config: EngineConfig,
}

impl AnalyticsEngine {
    pub fn new(snapshot: impl Into<Arc<SnapshotStore>>) -> Self {
        Self::with_config(snapshot, EngineConfig::default())
    }

    pub fn with_config(snapshot: impl Into<Arc<SnapshotStore>>, config: EngineConfig) -> Self {
        AnalyticsEngine {
            snapshot: snapshot.into(),
            config,
        }
    }

    /// Validate `dataset`, build its snapshot and wrap it
    pub fn from_dataset(dataset: Dataset, config: EngineConfig) -> DatasetResult<Self> {
        Ok(Self::with_config(dataset.into_snapshot()?, config))
    }

    pub fn snapshot(&self) -> &SnapshotStore {
        &self.snapshot
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn birth_month_info(&self) -> BirthMonthInfo {
        analytics::birth_month_info(&self.snapshot)
    }

    pub fn name_info(&self) -> FirstNameInfo {
        analytics::name_info(&self.snapshot)
    }

    pub fn lonely_users(&self) -> Vec<UserInfo> {
        analytics::lonely_users(&self.snapshot)
    }

    pub fn live_away_from_home(&self) -> Vec<UserInfo> {
        analytics::live_away_from_home(&self.snapshot)
    }

    pub fn photos_with_most_tags(&self, num: usize) -> Vec<TaggedPhotoInfo> {
        analytics::photos_with_most_tags(&self.snapshot, num)
    }

    pub fn match_maker(&self, num: usize, year_diff: u32) -> Vec<MatchPair> {
        analytics::match_maker(&self.snapshot, num, year_diff)
    }

    pub fn suggest_friends(&self, num: usize) -> Vec<UsersPair> {
        analytics::suggest_friends(&self.snapshot, num)
    }

    pub fn event_states(&self) -> EventStateInfo {
        analytics::event_states(&self.snapshot)
    }

    pub fn age_info(&self, user: UserId) -> AnalyticsResult<AgeInfo> {
        analytics::age_info(&self.snapshot, user)
    }

    /// Sibling detection with the configured year gap
    pub fn potential_siblings(&self) -> Vec<SiblingInfo> {
        analytics::relationships::potential_siblings_within(
            &self.snapshot,
            self.config.sibling_year_gap,
        )
    }

    /// Run all ten operations in parallel, taking N and the year bound from
    /// the configuration and `target_user` for the age query.
    pub fn run_all(&self, target_user: UserId) -> Report {
        let config = &self.config;
        info!("Running analytics battery (age target {})", target_user);

        let (
            (
                ((birth_months, names), (lonely_users, live_away_from_home)),
                ((top_tagged_photos, matches), (friend_suggestions, event_states)),
            ),
            (age_info, potential_siblings),
        ) = rayon::join(
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || rayon::join(|| self.birth_month_info(), || self.name_info()),
                            || rayon::join(|| self.lonely_users(), || self.live_away_from_home()),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || self.photos_with_most_tags(config.top_photos),
                                    || self.match_maker(config.top_matches, config.match_year_diff),
                                )
                            },
                            || {
                                rayon::join(
                                    || self.suggest_friends(config.top_suggestions),
                                    || self.event_states(),
                                )
                            },
                        )
                    },
                )
            },
            || rayon::join(|| self.age_info(target_user), || self.potential_siblings()),
        );

        Report {
            birth_months,
            names,
            lonely_users,
            live_away_from_home,
            top_tagged_photos,
            matches,
            friend_suggestions,
            event_states,
            age_info,
            potential_siblings,
        }
    }
}

/// Results of the full battery
///
/// The age query can fail on its own; its slot keeps the failure instead of
/// discarding the other nine answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub birth_months: BirthMonthInfo,
    pub names: FirstNameInfo,
    pub lonely_users: Vec<UserInfo>,
    pub live_away_from_home: Vec<UserInfo>,
    pub top_tagged_photos: Vec<TaggedPhotoInfo>,
    pub matches: Vec<MatchPair>,
    pub friend_suggestions: Vec<UsersPair>,
    pub event_states: EventStateInfo,
    #[serde(serialize_with = "serialize_outcome")]
    pub age_info: AnalyticsResult<AgeInfo>,
    pub potential_siblings: Vec<SiblingInfo>,
}

/// Answers serialise as themselves, failures as `{"error": "..."}`
fn serialize_outcome<T, S>(value: &AnalyticsResult<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Ok(answer) => answer.serialize(serializer),
        Err(err) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("error", &err.to_string())?;
            map.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsError;
    use crate::snapshot::{FriendEdge, User};

    fn engine() -> AnalyticsEngine {
        let dataset = Dataset {
            users: vec![
                User::new(1u64, "Ann", "Lee").born(1990, 4, 1),
                User::new(2u64, "Bob", "Lee").born(1985, 4, 2),
                User::new(3u64, "Cy", "Kim"),
            ],
            friends: vec![FriendEdge::new(1u64, 2u64)],
            ..Dataset::default()
        };
        AnalyticsEngine::from_dataset(dataset, EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_run_all_matches_individual_calls() {
        let engine = engine();
        let report = engine.run_all(UserId::new(1));

        assert_eq!(report.birth_months, engine.birth_month_info());
        assert_eq!(report.lonely_users, engine.lonely_users());
        assert_eq!(report.age_info, engine.age_info(UserId::new(1)));
        assert_eq!(report.age_info.as_ref().unwrap().oldest.id, UserId::new(2));
        assert_eq!(report.names.most_common_count, 1);
    }

    #[test]
    fn test_failed_age_query_serialises_as_error() {
        let engine = engine();
        let report = engine.run_all(UserId::new(3));
        assert_eq!(report.age_info, Err(AnalyticsError::NoEligibleFriends(UserId::new(3))));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["age_info"]["error"],
            "User UserId(3) has no friends with a complete birth date"
        );
        assert_eq!(json["lonely_users"][0]["id"], 3);
    }

    #[test]
    fn test_clones_share_snapshot() {
        let engine = engine();
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.snapshot(), clone.snapshot()));
    }
}
