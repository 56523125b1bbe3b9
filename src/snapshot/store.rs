//! Snapshot store: validated base relations plus eagerly built indexes
//!
//! The store is built once from a [`Dataset`] and never mutated. Building is
//! total: any malformed input rejects the whole snapshot.

use super::entity::{Album, City, Event, FriendEdge, Photo, User};
use super::types::{AlbumId, CityId, EventId, PhotoId, UserId};
use crate::dataset::Dataset;
use fakebook_graph_algorithms::{degree_stats, GraphView};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::{debug, info};

/// Precondition violations detected while building a snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("Duplicate {relation} id {id}")]
    DuplicateId { relation: &'static str, id: u64 },

    #[error("{relation} references unknown user {user}")]
    UnknownUser { relation: &'static str, user: UserId },

    #[error("{relation} references unknown city {city}")]
    UnknownCity { relation: &'static str, city: CityId },

    #[error("Photo {photo} references unknown album {album}")]
    UnknownAlbum { photo: PhotoId, album: AlbumId },

    #[error("Tag references unknown photo {0}")]
    UnknownPhoto(PhotoId),

    #[error("Friend edge ({0}, {1}) is not stored with the smaller id first")]
    NonCanonicalFriendEdge(UserId, UserId),

    #[error("Friend edge ({0}, {1}) appears more than once")]
    DuplicateFriendEdge(UserId, UserId),

    #[error("User {0} cannot be friends with itself")]
    SelfFriendship(UserId),

    #[error("User {user} has more than one {relation} record")]
    DuplicateCityRecord { relation: &'static str, user: UserId },

    #[error("User {user} has birth month {month}, expected 1-12")]
    InvalidBirthMonth { user: UserId, month: u8 },

    #[error("User {user} has birth day {day}, expected 1-31")]
    InvalidBirthDay { user: UserId, day: u8 },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Immutable, fully indexed copy of the dataset
///
/// Lookups by id go through ordered maps or hash maps; every grouping index
/// the analytics need is materialised at build time, so the store is
/// `Send + Sync` and can be shared behind an `Arc` by concurrent readers.
#[derive(Debug)]
pub struct SnapshotStore {
    /// Users ordered by id
    users: BTreeMap<UserId, User>,
    cities: FxHashMap<CityId, City>,
    current_city: FxHashMap<UserId, CityId>,
    hometown: FxHashMap<UserId, CityId>,

    /// Canonical friend edges, ascending
    friend_edges: Vec<FriendEdge>,
    /// Undirected adjacency over all users
    friend_graph: GraphView,

    events: Vec<Event>,
    albums: FxHashMap<AlbumId, Album>,
    /// Photos ordered by id
    photos: BTreeMap<PhotoId, Photo>,

    // Grouping indexes
    by_first_name: BTreeMap<String, Vec<UserId>>,
    by_birth_month: BTreeMap<u8, Vec<UserId>>,
    by_hometown: FxHashMap<CityId, Vec<UserId>>,
    photo_tags: BTreeMap<PhotoId, BTreeSet<UserId>>,
    user_photos: FxHashMap<UserId, BTreeSet<PhotoId>>,
    album_photos: FxHashMap<AlbumId, Vec<PhotoId>>,
    events_by_state: BTreeMap<Option<String>, Vec<EventId>>,
}

impl SnapshotStore {
    /// Validate `dataset` and build every index.
    pub fn build(dataset: Dataset) -> SnapshotResult<Self> {
        let Dataset {
            users: user_rows,
            cities: city_rows,
            current_cities,
            hometown_cities,
            friends,
            events,
            albums: album_rows,
            photos: photo_rows,
            tags,
        } = dataset;

        // Users
        let mut users = BTreeMap::new();
        for user in user_rows {
            if let Some(month) = user.month_of_birth {
                if !(1..=12).contains(&month) {
                    return Err(SnapshotError::InvalidBirthMonth { user: user.id, month });
                }
            }
            if let Some(day) = user.day_of_birth {
                if !(1..=31).contains(&day) {
                    return Err(SnapshotError::InvalidBirthDay { user: user.id, day });
                }
            }
            let id = user.id;
            if users.insert(id, user).is_some() {
                return Err(SnapshotError::DuplicateId { relation: "user", id: id.as_u64() });
            }
        }

        // Cities
        let mut cities = FxHashMap::default();
        for city in city_rows {
            let id = city.id;
            if cities.insert(id, city).is_some() {
                return Err(SnapshotError::DuplicateId { relation: "city", id: id.as_u64() });
            }
        }

        let current_city = index_city_records("current city", current_cities, &users, &cities)?;
        let hometown = index_city_records("hometown", hometown_cities, &users, &cities)?;

        // Friendships
        let mut seen = FxHashSet::default();
        for edge in &friends {
            if edge.user1 == edge.user2 {
                return Err(SnapshotError::SelfFriendship(edge.user1));
            }
            if !edge.is_canonical() {
                return Err(SnapshotError::NonCanonicalFriendEdge(edge.user1, edge.user2));
            }
            for user in [edge.user1, edge.user2] {
                if !users.contains_key(&user) {
                    return Err(SnapshotError::UnknownUser { relation: "friend edge", user });
                }
            }
            if !seen.insert(*edge) {
                return Err(SnapshotError::DuplicateFriendEdge(edge.user1, edge.user2));
            }
        }
        let mut friend_edges = friends;
        friend_edges.sort_unstable();

        let raw_edges: Vec<(u64, u64)> = friend_edges
            .iter()
            .map(|e| (e.user1.as_u64(), e.user2.as_u64()))
            .collect();
        let friend_graph = GraphView::from_edges(users.keys().map(UserId::as_u64), &raw_edges);

        // Events
        let mut event_ids = FxHashSet::default();
        let mut events_by_state: BTreeMap<Option<String>, Vec<EventId>> = BTreeMap::new();
        for event in &events {
            if !event_ids.insert(event.id) {
                return Err(SnapshotError::DuplicateId { relation: "event", id: event.id.as_u64() });
            }
            let state = match event.city_id {
                Some(city_id) => {
                    let city = cities.get(&city_id).ok_or(SnapshotError::UnknownCity {
                        relation: "event",
                        city: city_id,
                    })?;
                    city.state_name.clone()
                }
                None => None,
            };
            events_by_state.entry(state).or_default().push(event.id);
        }

        // Albums and photos
        let mut albums = FxHashMap::default();
        for album in album_rows {
            let id = album.id;
            if albums.insert(id, album).is_some() {
                return Err(SnapshotError::DuplicateId { relation: "album", id: id.as_u64() });
            }
        }

        let mut photos = BTreeMap::new();
        let mut album_photos: FxHashMap<AlbumId, Vec<PhotoId>> = FxHashMap::default();
        for photo in photo_rows {
            if !albums.contains_key(&photo.album_id) {
                return Err(SnapshotError::UnknownAlbum { photo: photo.id, album: photo.album_id });
            }
            let (id, album_id) = (photo.id, photo.album_id);
            if photos.insert(id, photo).is_some() {
                return Err(SnapshotError::DuplicateId { relation: "photo", id: id.as_u64() });
            }
            album_photos.entry(album_id).or_default().push(id);
        }
        for ids in album_photos.values_mut() {
            ids.sort_unstable();
        }

        // Tags, deduplicated per photo
        let mut photo_tags: BTreeMap<PhotoId, BTreeSet<UserId>> = BTreeMap::new();
        let mut user_photos: FxHashMap<UserId, BTreeSet<PhotoId>> = FxHashMap::default();
        for tag in &tags {
            if !photos.contains_key(&tag.photo_id) {
                return Err(SnapshotError::UnknownPhoto(tag.photo_id));
            }
            if !users.contains_key(&tag.subject_id) {
                return Err(SnapshotError::UnknownUser { relation: "tag", user: tag.subject_id });
            }
            photo_tags.entry(tag.photo_id).or_default().insert(tag.subject_id);
            user_photos.entry(tag.subject_id).or_default().insert(tag.photo_id);
        }

        // User grouping indexes. BTreeMap iteration is by ascending id, so each group is sorted.
        let mut by_first_name: BTreeMap<String, Vec<UserId>> = BTreeMap::new();
        let mut by_birth_month: BTreeMap<u8, Vec<UserId>> = BTreeMap::new();
        for user in users.values() {
            by_first_name.entry(user.first_name.clone()).or_default().push(user.id);
            if let Some(month) = user.month_of_birth {
                by_birth_month.entry(month).or_default().push(user.id);
            }
        }
        let mut by_hometown: FxHashMap<CityId, Vec<UserId>> = FxHashMap::default();
        for (&user, &city) in &hometown {
            by_hometown.entry(city).or_default().push(user);
        }
        for ids in by_hometown.values_mut() {
            ids.sort_unstable();
        }

        let stats = degree_stats(&friend_graph);
        info!(
            "Snapshot built: {} users, {} cities, {} friendships, {} events, {} photos, {} tags",
            users.len(),
            cities.len(),
            friend_edges.len(),
            events.len(),
            photos.len(),
            tags.len()
        );
        debug!(
            "Friend graph: max degree {}, mean degree {:.2}, {} isolated users",
            stats.max_degree, stats.mean_degree, stats.isolated_count
        );

        Ok(SnapshotStore {
            users,
            cities,
            current_city,
            hometown,
            friend_edges,
            friend_graph,
            events,
            albums,
            photos,
            by_first_name,
            by_birth_month,
            by_hometown,
            photo_tags,
            user_photos,
            album_photos,
            events_by_state,
        })
    }

    // ---- Users ----

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All users, ascending by id
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// First names with the users holding them (ids ascending), names ascending
    pub fn first_name_groups(&self) -> impl Iterator<Item = (&str, &[UserId])> {
        self.by_first_name.iter().map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    pub fn users_with_first_name(&self, name: &str) -> &[UserId] {
        self.by_first_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Birth months that at least one user has, with those users (ids ascending)
    pub fn birth_month_groups(&self) -> impl Iterator<Item = (u8, &[UserId])> {
        self.by_birth_month.iter().map(|(&month, ids)| (month, ids.as_slice()))
    }

    pub fn users_born_in_month(&self, month: u8) -> &[UserId] {
        self.by_birth_month.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    // ---- Cities ----

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    pub fn current_city(&self, user: UserId) -> Option<CityId> {
        self.current_city.get(&user).copied()
    }

    pub fn hometown(&self, user: UserId) -> Option<CityId> {
        self.hometown.get(&user).copied()
    }

    /// Users whose hometown is `city`, ascending
    pub fn users_from_hometown(&self, city: CityId) -> &[UserId] {
        self.by_hometown.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    // ---- Friendships ----

    /// Canonical friend edges, ascending by (user1, user2)
    pub fn friend_edges(&self) -> &[FriendEdge] {
        &self.friend_edges
    }

    pub fn friend_graph(&self) -> &GraphView {
        &self.friend_graph
    }

    /// Direct friends of `user`, ascending. Empty for unknown users.
    pub fn friends_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        let row = match self.friend_graph.index_of(user.as_u64()) {
            Some(idx) => self.friend_graph.neighbors(idx),
            None => &[],
        };
        row.iter().map(move |&idx| UserId::new(self.friend_graph.node_at(idx)))
    }

    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        match (
            self.friend_graph.index_of(a.as_u64()),
            self.friend_graph.index_of(b.as_u64()),
        ) {
            (Some(u), Some(v)) => self.friend_graph.are_adjacent(u, v),
            _ => false,
        }
    }

    // ---- Events ----

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events grouped by the state of their city; `None` is the unknown-state bucket
    pub fn events_by_state(&self) -> impl Iterator<Item = (Option<&str>, &[EventId])> {
        self.events_by_state
            .iter()
            .map(|(state, ids)| (state.as_deref(), ids.as_slice()))
    }

    // ---- Albums, photos and tags ----

    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(&id)
    }

    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(&id)
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Photos in `album`, ascending
    pub fn photos_in_album(&self, album: AlbumId) -> &[PhotoId] {
        self.album_photos.get(&album).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Photos with at least one tag, ascending, with their distinct tagged users
    pub fn tagged_photos(&self) -> impl Iterator<Item = (PhotoId, &BTreeSet<UserId>)> {
        self.photo_tags.iter().map(|(&photo, users)| (photo, users))
    }

    pub fn tagged_users(&self, photo: PhotoId) -> Option<&BTreeSet<UserId>> {
        self.photo_tags.get(&photo)
    }

    pub fn photos_tagged_with(&self, user: UserId) -> Option<&BTreeSet<PhotoId>> {
        self.user_photos.get(&user)
    }
}

/// Validate user→city records and index them, at most one per user
fn index_city_records(
    relation: &'static str,
    records: Vec<super::entity::CityRecord>,
    users: &BTreeMap<UserId, User>,
    cities: &FxHashMap<CityId, City>,
) -> SnapshotResult<FxHashMap<UserId, CityId>> {
    let mut index = FxHashMap::default();
    for record in records {
        if !users.contains_key(&record.user_id) {
            return Err(SnapshotError::UnknownUser { relation, user: record.user_id });
        }
        if !cities.contains_key(&record.city_id) {
            return Err(SnapshotError::UnknownCity { relation, city: record.city_id });
        }
        if index.insert(record.user_id, record.city_id).is_some() {
            return Err(SnapshotError::DuplicateCityRecord { relation, user: record.user_id });
        }
    }
    Ok(index)
}
