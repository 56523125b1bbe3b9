//! Photo-tag analysis: most tagged photos and matchmaker pairs

use super::results::{MatchPair, PhotoInfo, TaggedPhotoInfo, UserInfo};
use crate::snapshot::{PhotoId, SnapshotStore, User, UserId};
use fakebook_graph_algorithms::top_n;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Top `num` photos by number of distinct tagged users, ties broken by
/// ascending photo id. Each photo lists its tagged users by ascending id.
pub fn photos_with_most_tags(store: &SnapshotStore, num: usize) -> Vec<TaggedPhotoInfo> {
    let candidates: Vec<(PhotoId, &BTreeSet<UserId>)> = store.tagged_photos().collect();

    let ranked = top_n(candidates, num, |a, b| {
        b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0))
    });
    debug!("photos_with_most_tags: returning {} photos", ranked.len());

    ranked
        .into_iter()
        .filter_map(|(photo, subjects)| {
            Some(TaggedPhotoInfo {
                photo: PhotoInfo::lookup(store, photo)?,
                tagged_users: UserInfo::lookup_all(store, subjects),
            })
        })
        .collect()
}

/// Top `num` pairs of same-gender users, born at most `year_diff` years
/// apart, tagged together in at least one photo and not already friends.
///
/// Pairs are ranked by number of shared photos, ties broken by ascending
/// `(first, second)`. Each pair lists its shared photos by ascending id.
pub fn match_maker(store: &SnapshotStore, num: usize, year_diff: u32) -> Vec<MatchPair> {
    let mut shared: FxHashMap<(UserId, UserId), Vec<PhotoId>> = FxHashMap::default();

    // Photos come in ascending id order, so each shared list stays sorted
    for (photo, subjects) in store.tagged_photos() {
        let profiled: Vec<&User> = subjects
            .iter()
            .filter_map(|&id| store.user(id))
            .filter(|user| user.gender.is_some() && user.year_of_birth.is_some())
            .collect();

        for (i, first) in profiled.iter().enumerate() {
            for second in &profiled[i + 1..] {
                if compatible(store, first, second, year_diff) {
                    shared.entry((first.id, second.id)).or_default().push(photo);
                }
            }
        }
    }

    let candidate_count = shared.len();
    let candidates: Vec<((UserId, UserId), Vec<PhotoId>)> = shared.into_iter().collect();
    let ranked = top_n(candidates, num, |a, b| {
        b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0))
    });
    debug!("match_maker: {} candidate pairs, returning {}", candidate_count, ranked.len());

    ranked
        .into_iter()
        .filter_map(|((first, second), photos)| {
            let first = store.user(first)?;
            let second = store.user(second)?;
            Some(MatchPair {
                first: first.into(),
                first_birth_year: first.year_of_birth?,
                second: second.into(),
                second_birth_year: second.year_of_birth?,
                shared_photos: photos
                    .into_iter()
                    .filter_map(|photo| PhotoInfo::lookup(store, photo))
                    .collect(),
            })
        })
        .collect()
}

/// `first` and `second` share a gender, are within `year_diff` birth years
/// and are not friends. Users missing gender or year never match.
fn compatible(store: &SnapshotStore, first: &User, second: &User, year_diff: u32) -> bool {
    let (Some(g1), Some(g2)) = (&first.gender, &second.gender) else {
        return false;
    };
    let (Some(y1), Some(y2)) = (first.year_of_birth, second.year_of_birth) else {
        return false;
    };
    g1 == g2 && y1.abs_diff(y2) <= year_diff && !store.are_friends(first.id, second.id)
}
