//! Result values returned by the analytical operations
//!
//! All of them are self-contained (no borrows into the snapshot) and
//! serialisable, so callers can hand them straight to an output layer.

use crate::snapshot::{AlbumId, PhotoId, SnapshotStore, User, UserId};
use serde::{Deserialize, Serialize};

/// Identity of a user as reported in results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl UserInfo {
    pub(crate) fn lookup(store: &SnapshotStore, id: UserId) -> Option<Self> {
        store.user(id).map(UserInfo::from)
    }

    /// Resolve ids that came out of the snapshot's own indexes
    pub(crate) fn lookup_all<'a, I>(store: &SnapshotStore, ids: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a UserId>,
    {
        ids.into_iter()
            .filter_map(|&id| Self::lookup(store, id))
            .collect()
    }
}

/// A photo with its containing album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub photo_id: PhotoId,
    pub album_id: AlbumId,
    pub link: String,
    pub album_name: String,
}

impl PhotoInfo {
    pub(crate) fn lookup(store: &SnapshotStore, id: PhotoId) -> Option<Self> {
        let photo = store.photo(id)?;
        let album = store.album(photo.album_id)?;
        Some(PhotoInfo {
            photo_id: photo.id,
            album_id: album.id,
            link: photo.link.clone(),
            album_name: album.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMonthInfo {
    /// Users with a birth month on record
    pub users_with_month: usize,
    /// `None` when no user has a birth month
    pub most_popular_month: Option<u8>,
    pub least_popular_month: Option<u8>,
    pub most_popular_month_users: Vec<UserInfo>,
    pub least_popular_month_users: Vec<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstNameInfo {
    pub longest_names: Vec<String>,
    pub shortest_names: Vec<String>,
    pub most_common_names: Vec<String>,
    /// Number of users holding each of the most common names
    pub most_common_count: usize,
}

/// Two users who are not friends, with their mutual friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPair {
    pub first: UserInfo,
    pub second: UserInfo,
    pub mutual_friends: Vec<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPhotoInfo {
    pub photo: PhotoInfo,
    pub tagged_users: Vec<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub first: UserInfo,
    pub first_birth_year: i32,
    pub second: UserInfo,
    pub second_birth_year: i32,
    pub shared_photos: Vec<PhotoInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingInfo {
    pub first: UserInfo,
    pub second: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStateInfo {
    /// Events held in each modal state
    pub event_count: usize,
    /// Modal states, ascending; `None` (unknown state) sorts last
    pub states: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInfo {
    pub oldest: UserInfo,
    pub youngest: UserInfo,
}
