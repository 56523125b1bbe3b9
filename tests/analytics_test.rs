use fakebook::{
    Album, AnalyticsEngine, City, CityRecord, Dataset, EngineConfig, Event, FriendEdge, Photo,
    SnapshotStore, Tag, User, UserId,
};
use std::collections::BTreeSet;

/// A mid-sized network with every relation populated
fn network() -> Dataset {
    let genders = ["female", "male"];
    let last_names = ["Stark", "Lannister", "Tully"];

    let users: Vec<User> = (1..=30u64)
        .map(|id| {
            let mut user = User::new(id, format!("N{}", id % 7), last_names[(id % 3) as usize]);
            if id % 5 != 0 {
                user = user.with_gender(genders[(id % 2) as usize]);
            }
            if id % 4 != 0 {
                user = user.born(1980 + (id % 15) as i32, (id % 12 + 1) as u8, (id % 27 + 1) as u8);
            }
            user
        })
        .collect();

    let mut friends = Vec::new();
    for id in 1..=26u64 {
        for step in [1u64, 3, 8] {
            let other = id + step;
            if other <= 26 && (id * step) % 4 != 1 {
                friends.push(FriendEdge::canonical(id, other));
            }
        }
    }
    friends.sort_unstable();
    friends.dedup();

    let cities = vec![
        City::new(1u64, "Winterfell", Some("North")),
        City::new(2u64, "Riverrun", Some("Riverlands")),
        City::new(3u64, "Casterly Rock", Some("Westerlands")),
        City::new(4u64, "Old Town", None),
    ];

    Dataset {
        users,
        cities,
        current_cities: (1..=30u64).filter(|id| id % 6 != 0).map(|id| CityRecord::new(id, id % 4 + 1)).collect(),
        hometown_cities: (1..=30u64).filter(|id| id % 7 != 0).map(|id| CityRecord::new(id, id % 3 + 1)).collect(),
        friends,
        events: (1..=12u64)
            .map(|id| Event::new(id, if id % 5 == 0 { None } else { Some(id % 4 + 1) }))
            .collect(),
        albums: vec![Album::new(1u64, "One"), Album::new(2u64, "Two")],
        photos: (1..=15u64).map(|id| Photo::new(id, id % 2 + 1, format!("link{}", id))).collect(),
        tags: (1..=15u64)
            .flat_map(|photo| (0..photo % 4 + 1).map(move |k| Tag::new(photo, (photo * 7 + k * 5) % 30 + 1)))
            .collect(),
    }
}

fn engine() -> AnalyticsEngine {
    AnalyticsEngine::new(network().into_snapshot().unwrap())
}

fn friend_set(store: &SnapshotStore, user: UserId) -> BTreeSet<UserId> {
    store.friends_of(user).collect()
}

#[test]
fn test_lonely_iff_degree_zero() {
    let engine = engine();
    let store = engine.snapshot();
    let lonely: BTreeSet<UserId> = engine.lonely_users().iter().map(|u| u.id).collect();

    for user in store.users() {
        assert_eq!(lonely.contains(&user.id), store.friends_of(user.id).count() == 0);
    }
    // 27..=30 never appear in an edge
    for id in 27..=30u64 {
        assert!(lonely.contains(&UserId::new(id)));
    }
}

#[test]
fn test_friend_edges_are_canonical() {
    let engine = engine();
    for edge in engine.snapshot().friend_edges() {
        assert!(edge.user1 < edge.user2);
    }
}

#[test]
fn test_suggestions_are_ranked_and_exact() {
    let engine = engine();
    let store = engine.snapshot();
    let pairs = engine.suggest_friends(15);
    assert!(!pairs.is_empty());

    for pair in &pairs {
        let (u, v) = (pair.first.id, pair.second.id);
        assert!(u < v);
        assert!(!store.are_friends(u, v));

        let expected: Vec<UserId> = friend_set(store, u)
            .intersection(&friend_set(store, v))
            .copied()
            .collect();
        let actual: Vec<UserId> = pair.mutual_friends.iter().map(|f| f.id).collect();
        assert_eq!(actual, expected);
        assert!(!actual.contains(&u) && !actual.contains(&v));
    }

    for window in pairs.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        let key_a = (a.mutual_friends.len(), a.first.id, a.second.id);
        let key_b = (b.mutual_friends.len(), b.first.id, b.second.id);
        assert!(key_a.0 > key_b.0 || (key_a.0 == key_b.0 && (key_a.1, key_a.2) < (key_b.1, key_b.2)));
    }
}

#[test]
fn test_top_photos_ranked() {
    let engine = engine();
    let photos = engine.photos_with_most_tags(6);
    assert_eq!(photos.len(), 6);

    for window in photos.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        assert!(
            a.tagged_users.len() > b.tagged_users.len()
                || (a.tagged_users.len() == b.tagged_users.len() && a.photo.photo_id < b.photo.photo_id)
        );
    }
    for photo in &photos {
        let ids: Vec<UserId> = photo.tagged_users.iter().map(|u| u.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}

#[test]
fn test_matchmaker_invariants() {
    let engine = engine();
    let store = engine.snapshot();

    for year_diff in [0u32, 2, 5, 20] {
        let pairs = engine.match_maker(50, year_diff);
        for pair in &pairs {
            let first = store.user(pair.first.id).unwrap();
            let second = store.user(pair.second.id).unwrap();

            assert!(first.id < second.id);
            assert!(!store.are_friends(first.id, second.id));
            assert!(first.gender.is_some());
            assert_eq!(first.gender, second.gender);
            assert!(pair.first_birth_year.abs_diff(pair.second_birth_year) <= year_diff);

            for photo in &pair.shared_photos {
                let tagged = store.tagged_users(photo.photo_id).unwrap();
                assert!(tagged.contains(&first.id) && tagged.contains(&second.id));
            }
        }
        for window in pairs.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            assert!(
                a.shared_photos.len() > b.shared_photos.len()
                    || (a.shared_photos.len() == b.shared_photos.len()
                        && (a.first.id, a.second.id) < (b.first.id, b.second.id))
            );
        }
    }
}

#[test]
fn test_live_away_and_siblings_sorted() {
    let engine = engine();
    let store = engine.snapshot();

    let movers = engine.live_away_from_home();
    assert!(movers.windows(2).all(|w| w[0].id < w[1].id));
    for user in &movers {
        assert_ne!(store.current_city(user.id), store.hometown(user.id));
        assert!(store.current_city(user.id).is_some() && store.hometown(user.id).is_some());
    }

    let siblings = engine.potential_siblings();
    assert!(siblings
        .windows(2)
        .all(|w| (w[0].first.id, w[0].second.id) < (w[1].first.id, w[1].second.id)));
    for pair in &siblings {
        assert_eq!(pair.first.last_name, pair.second.last_name);
        assert!(store.are_friends(pair.first.id, pair.second.id));
        assert_eq!(store.hometown(pair.first.id), store.hometown(pair.second.id));
    }
}

#[test]
fn test_configured_sibling_gap() {
    let config = EngineConfig { sibling_year_gap: 1, ..EngineConfig::default() };
    let engine = AnalyticsEngine::from_dataset(network(), config).unwrap();
    for pair in engine.potential_siblings() {
        let first = engine.snapshot().user(pair.first.id).unwrap();
        let second = engine.snapshot().user(pair.second.id).unwrap();
        assert_eq!(first.year_of_birth, second.year_of_birth);
    }
}

#[test]
fn test_operations_are_idempotent() {
    let engine = engine();
    let first = engine.run_all(UserId::new(2));
    let second = engine.run_all(UserId::new(2));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_event_states_count_all_events() {
    let engine = engine();
    let info = engine.event_states();
    let total: usize = engine.snapshot().events_by_state().map(|(_, ids)| ids.len()).sum();
    assert_eq!(total, 12);
    assert!(info.event_count > 0);
    assert!(!info.states.is_empty());
    for (state, ids) in engine.snapshot().events_by_state() {
        assert!(ids.len() <= info.event_count);
        if ids.len() == info.event_count {
            assert!(info.states.contains(&state.map(str::to_string)));
        }
    }
}
