//! Geographic aggregates: relocation and event states

use super::results::{EventStateInfo, UserInfo};
use crate::snapshot::SnapshotStore;
use tracing::debug;

/// Users whose current city differs from their hometown, ascending by id.
/// Users missing either record are skipped.
pub fn live_away_from_home(store: &SnapshotStore) -> Vec<UserInfo> {
    let movers: Vec<UserInfo> = store
        .users()
        .filter(|user| match (store.current_city(user.id), store.hometown(user.id)) {
            (Some(current), Some(home)) => current != home,
            _ => false,
        })
        .map(UserInfo::from)
        .collect();
    debug!("live_away_from_home: {} users", movers.len());
    movers
}

/// States hosting the most events.
///
/// Events without a city, or whose city has no state, count towards an
/// unknown-state bucket that competes like any other; if it wins it is
/// reported as `None` after every named state.
pub fn event_states(store: &SnapshotStore) -> EventStateInfo {
    let buckets: Vec<(Option<&str>, usize)> = store
        .events_by_state()
        .map(|(state, ids)| (state, ids.len()))
        .collect();

    let event_count = buckets.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let mut states: Vec<Option<String>> = buckets
        .into_iter()
        .filter(|&(_, count)| count == event_count && count > 0)
        .map(|(state, _)| state.map(str::to_string))
        .collect();
    // Buckets come in ascending order with the unknown state first; move it last
    states.sort_by_key(Option::is_none);

    debug!("event_states: {} states with {} events", states.len(), event_count);
    EventStateInfo { event_count, states }
}
