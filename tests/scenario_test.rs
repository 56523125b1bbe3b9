use fakebook::{
    Album, AnalyticsEngine, AnalyticsError, Dataset, FriendEdge, Photo, PhotoId, Tag, User, UserId,
};

#[test]
fn test_top_tagged_photo_lists_users_ascending() {
    // Users {1,2,3}, friends {(1,2)}, photo 10 tags {1,2,3}
    let dataset = Dataset {
        users: vec![
            User::new(3u64, "Cat", "C"),
            User::new(1u64, "Ann", "A"),
            User::new(2u64, "Bob", "B"),
        ],
        friends: vec![FriendEdge::new(1u64, 2u64)],
        albums: vec![Album::new(1u64, "Album")],
        photos: vec![Photo::new(10u64, 1u64, "www.photolink.net/10")],
        tags: vec![Tag::new(10u64, 3u64), Tag::new(10u64, 1u64), Tag::new(10u64, 2u64)],
        ..Dataset::default()
    };
    let engine = AnalyticsEngine::new(dataset.into_snapshot().unwrap());

    let top = engine.photos_with_most_tags(1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].photo.photo_id, PhotoId::new(10));
    let tagged: Vec<UserId> = top[0].tagged_users.iter().map(|u| u.id).collect();
    assert_eq!(tagged, vec![UserId::new(1), UserId::new(2), UserId::new(3)]);
}

#[test]
fn test_matchmaker_pairs_tagged_strangers() {
    // Users {5,6} born 1990/1991, same gender, tagged together in photo 7, not friends
    let dataset = Dataset {
        users: vec![
            User::new(5u64, "Romeo", "Montague").with_gender("male").born_in_year(1990),
            User::new(6u64, "Benvolio", "Montague").with_gender("male").born_in_year(1991),
        ],
        albums: vec![Album::new(3u64, "Verona")],
        photos: vec![Photo::new(7u64, 3u64, "www.photolink.net/7")],
        tags: vec![Tag::new(7u64, 5u64), Tag::new(7u64, 6u64)],
        ..Dataset::default()
    };
    let engine = AnalyticsEngine::new(dataset.into_snapshot().unwrap());

    let pairs = engine.match_maker(1, 2);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].first.id, UserId::new(5));
    assert_eq!(pairs[0].second.id, UserId::new(6));
    assert_eq!(pairs[0].first_birth_year, 1990);
    assert_eq!(pairs[0].second_birth_year, 1991);
    assert_eq!(pairs[0].shared_photos.len(), 1);
    assert_eq!(pairs[0].shared_photos[0].photo_id, PhotoId::new(7));
    assert_eq!(pairs[0].shared_photos[0].album_name, "Verona");
}

#[test]
fn test_age_info_without_dated_friends_is_not_found() {
    let dataset = Dataset {
        users: vec![
            User::new(1u64, "Solo", "S").born(1980, 1, 1),
            User::new(2u64, "Pal", "P").born_in_year(1985),
        ],
        friends: vec![FriendEdge::new(1u64, 2u64)],
        ..Dataset::default()
    };
    let engine = AnalyticsEngine::new(dataset.into_snapshot().unwrap());

    assert_eq!(
        engine.age_info(UserId::new(1)),
        Err(AnalyticsError::NoEligibleFriends(UserId::new(1)))
    );
    assert_eq!(
        engine.age_info(UserId::new(77)),
        Err(AnalyticsError::UserNotFound(UserId::new(77)))
    );
}

#[test]
fn test_empty_results_are_not_errors() {
    let engine = AnalyticsEngine::new(Dataset::default().into_snapshot().unwrap());

    assert!(engine.lonely_users().is_empty());
    assert!(engine.live_away_from_home().is_empty());
    assert!(engine.potential_siblings().is_empty());
    assert!(engine.suggest_friends(5).is_empty());
    assert!(engine.match_maker(5, 10).is_empty());
    assert!(engine.photos_with_most_tags(5).is_empty());
    assert_eq!(engine.event_states().event_count, 0);
}
