//! Fakebook Analytics
//!
//! A read-only analytics engine over an immutable snapshot of a
//! social-network dataset: demographic statistics, friendship-graph
//! structure, photo-tag patterns and geographic aggregates.
//!
//! # Architecture
//!
//! - [`snapshot`]: validated base relations and every index the queries need
//! - [`analytics`]: the ten analytical operations as pure functions
//! - [`engine`]: facade sharing one snapshot across threads
//! - [`dataset`], [`config`]: JSON dataset loading and YAML configuration
//!
//! Graph kernels (dense adjacency view, common neighbours, top-N ranking)
//! live in the `fakebook-graph-algorithms` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use fakebook::{AnalyticsEngine, Dataset, FriendEdge, User, UserId};
//!
//! let dataset = Dataset {
//!     users: vec![
//!         User::new(1u64, "Ada", "Byron"),
//!         User::new(2u64, "Alan", "Turing"),
//!         User::new(3u64, "Grace", "Hopper"),
//!     ],
//!     friends: vec![FriendEdge::new(1u64, 2u64), FriendEdge::new(2u64, 3u64)],
//!     ..Dataset::default()
//! };
//!
//! let engine = AnalyticsEngine::new(dataset.into_snapshot().unwrap());
//!
//! // 1 and 3 are not friends but share friend 2
//! let suggestions = engine.suggest_friends(1);
//! assert_eq!(suggestions[0].first.id, UserId::new(1));
//! assert_eq!(suggestions[0].mutual_friends[0].id, UserId::new(2));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod snapshot;

// Re-export main types for convenience
pub use analytics::{
    AgeInfo, AnalyticsError, AnalyticsResult, BirthMonthInfo, EventStateInfo, FirstNameInfo,
    MatchPair, PhotoInfo, SiblingInfo, TaggedPhotoInfo, UserInfo, UsersPair,
};
pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use dataset::{Dataset, DatasetError, DatasetResult};
pub use engine::{AnalyticsEngine, Report};
pub use snapshot::{
    Album, AlbumId, BirthDate, City, CityId, CityRecord, Event, EventId, FriendEdge, Photo,
    PhotoId, SnapshotError, SnapshotResult, SnapshotStore, Tag, User, UserId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
