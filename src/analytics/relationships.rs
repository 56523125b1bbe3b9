//! Friendship-graph analysis
//!
//! Isolated users, mutual-friend suggestions, sibling detection and
//! oldest/youngest friend lookup.

use super::results::{AgeInfo, SiblingInfo, UserInfo, UsersPair};
use super::{AnalyticsError, AnalyticsResult};
use crate::snapshot::{SnapshotStore, UserId};
use fakebook_graph_algorithms::{common_neighbor_pairs, isolated_nodes, top_n, CommonNeighbors};
use std::cmp::Reverse;
use tracing::debug;

/// Siblings must be born strictly fewer than this many years apart
pub const DEFAULT_SIBLING_YEAR_GAP: u32 = 10;

/// Users that appear in no friend edge, ascending by id
pub fn lonely_users(store: &SnapshotStore) -> Vec<UserInfo> {
    let ids: Vec<UserId> = isolated_nodes(store.friend_graph())
        .into_iter()
        .map(UserId::new)
        .collect();
    debug!("lonely_users: {} isolated", ids.len());
    UserInfo::lookup_all(store, &ids)
}

/// Top `num` non-friend pairs ranked by number of mutual friends.
///
/// Ties are broken by ascending `(first, second)`. Only pairs with at least
/// one mutual friend are candidates. Each pair lists all mutual friends by
/// ascending id.
pub fn suggest_friends(store: &SnapshotStore, num: usize) -> Vec<UsersPair> {
    let candidates = common_neighbor_pairs(store.friend_graph());
    let candidate_count = candidates.len();

    let ranked = top_n(candidates, num, |a: &CommonNeighbors, b: &CommonNeighbors| {
        b.shared
            .len()
            .cmp(&a.shared.len())
            .then_with(|| (a.first, a.second).cmp(&(b.first, b.second)))
    });
    debug!("suggest_friends: {} candidate pairs, returning {}", candidate_count, ranked.len());

    ranked
        .into_iter()
        .filter_map(|pair| {
            let shared: Vec<UserId> = pair.shared.into_iter().map(UserId::new).collect();
            Some(UsersPair {
                first: UserInfo::lookup(store, UserId::new(pair.first))?,
                second: UserInfo::lookup(store, UserId::new(pair.second))?,
                mutual_friends: UserInfo::lookup_all(store, &shared),
            })
        })
        .collect()
}

/// Friend pairs that look like siblings, using the default year gap
pub fn potential_siblings(store: &SnapshotStore) -> Vec<SiblingInfo> {
    potential_siblings_within(store, DEFAULT_SIBLING_YEAR_GAP)
}

/// Friend pairs with the same last name and hometown, both with a birth year,
/// born strictly fewer than `year_gap` years apart. One entry per friend
/// edge, ascending by `(first, second)`.
pub fn potential_siblings_within(store: &SnapshotStore, year_gap: u32) -> Vec<SiblingInfo> {
    let siblings: Vec<SiblingInfo> = store
        .friend_edges()
        .iter()
        .filter_map(|edge| {
            let first = store.user(edge.user1)?;
            let second = store.user(edge.user2)?;
            let (y1, y2) = (first.year_of_birth?, second.year_of_birth?);
            let home = store.hometown(first.id)?;

            let related = first.last_name == second.last_name
                && store.hometown(second.id) == Some(home)
                && y1.abs_diff(y2) < year_gap;
            related.then(|| SiblingInfo {
                first: first.into(),
                second: second.into(),
            })
        })
        .collect();
    debug!("potential_siblings: {} pairs", siblings.len());
    siblings
}

/// Oldest and youngest direct friends of `user` among those with a complete
/// birth date. Identical birth dates resolve to the larger user id at both
/// ends.
pub fn age_info(store: &SnapshotStore, user: UserId) -> AnalyticsResult<AgeInfo> {
    if store.user(user).is_none() {
        return Err(AnalyticsError::UserNotFound(user));
    }

    let eligible: Vec<(crate::snapshot::BirthDate, UserId)> = store
        .friends_of(user)
        .filter_map(|id| Some((store.user(id)?.birth_date()?, id)))
        .collect();

    let oldest = eligible.iter().min_by_key(|&&(date, id)| (date, Reverse(id)));
    let youngest = eligible.iter().max_by_key(|&&(date, id)| (date, id));

    match (oldest, youngest) {
        (Some(&(_, oldest)), Some(&(_, youngest))) => {
            debug!("age_info({}): {} eligible friends", user, eligible.len());
            Ok(AgeInfo {
                oldest: UserInfo::lookup(store, oldest).ok_or(AnalyticsError::UserNotFound(oldest))?,
                youngest: UserInfo::lookup(store, youngest)
                    .ok_or(AnalyticsError::UserNotFound(youngest))?,
            })
        }
        _ => Err(AnalyticsError::NoEligibleFriends(user)),
    }
}
