//! Analytical operations over an immutable snapshot
//!
//! Every operation is a pure function of the [`SnapshotStore`] and its own
//! scalar parameters. Orderings and tie-breaks are exact so repeated calls
//! return identical results.
//!
//! [`SnapshotStore`]: crate::snapshot::SnapshotStore

pub mod demographics;
pub mod geo;
pub mod relationships;
pub mod results;
pub mod tagging;

use crate::snapshot::UserId;
use thiserror::Error;

pub use demographics::{birth_month_info, name_info};
pub use geo::{event_states, live_away_from_home};
pub use relationships::{age_info, lonely_users, potential_siblings, suggest_friends};
pub use results::{
    AgeInfo, BirthMonthInfo, EventStateInfo, FirstNameInfo, MatchPair, PhotoInfo, SiblingInfo,
    TaggedPhotoInfo, UserInfo, UsersPair,
};
pub use tagging::{match_maker, photos_with_most_tags};

/// Failures of a single analytical call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("User {0} not found")]
    UserNotFound(UserId),

    #[error("User {0} has no friends with a complete birth date")]
    NoEligibleFriends(UserId),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
