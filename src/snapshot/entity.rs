//! Base entities of the social-network dataset
//!
//! Every entity is plain data: the loader deserialises them, the store
//! validates and indexes them, and nothing mutates them afterwards.

use super::types::{AlbumId, CityId, EventId, PhotoId, UserId};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Gender and each of the three birth fields are independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub year_of_birth: Option<i32>,
    #[serde(default)]
    pub month_of_birth: Option<u8>,
    #[serde(default)]
    pub day_of_birth: Option<u8>,
}

impl User {
    pub fn new(id: impl Into<UserId>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: None,
            year_of_birth: None,
            month_of_birth: None,
            day_of_birth: None,
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn born(mut self, year: i32, month: u8, day: u8) -> Self {
        self.year_of_birth = Some(year);
        self.month_of_birth = Some(month);
        self.day_of_birth = Some(day);
        self
    }

    pub fn born_in_year(mut self, year: i32) -> Self {
        self.year_of_birth = Some(year);
        self
    }

    pub fn born_in_month(mut self, month: u8) -> Self {
        self.month_of_birth = Some(month);
        self
    }

    /// Full birth date, only when year, month and day are all present
    pub fn birth_date(&self) -> Option<BirthDate> {
        Some(BirthDate {
            year: self.year_of_birth?,
            month: self.month_of_birth?,
            day: self.day_of_birth?,
        })
    }
}

/// A complete birth date. Field order gives chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub state_name: Option<String>,
}

impl City {
    pub fn new(id: impl Into<CityId>, name: impl Into<String>, state_name: Option<&str>) -> Self {
        City {
            id: id.into(),
            name: name.into(),
            state_name: state_name.map(str::to_string),
        }
    }
}

/// Links a user to a city. Used for both current-city and hometown records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub user_id: UserId,
    pub city_id: CityId,
}

impl CityRecord {
    pub fn new(user_id: impl Into<UserId>, city_id: impl Into<CityId>) -> Self {
        CityRecord {
            user_id: user_id.into(),
            city_id: city_id.into(),
        }
    }
}

/// An undirected friendship, stored with the smaller id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FriendEdge {
    pub user1: UserId,
    pub user2: UserId,
}

impl FriendEdge {
    /// Build an edge exactly as given; the store rejects it unless `user1 < user2`
    pub fn new(user1: impl Into<UserId>, user2: impl Into<UserId>) -> Self {
        FriendEdge {
            user1: user1.into(),
            user2: user2.into(),
        }
    }

    /// Build an edge in canonical order regardless of argument order
    pub fn canonical(a: impl Into<UserId>, b: impl Into<UserId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            FriendEdge { user1: a, user2: b }
        } else {
            FriendEdge { user1: b, user2: a }
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.user1 < self.user2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Events without a city land in the unknown-state bucket
    #[serde(default)]
    pub city_id: Option<CityId>,
}

impl Event {
    pub fn new(id: impl Into<EventId>, city_id: Option<u64>) -> Self {
        Event {
            id: id.into(),
            city_id: city_id.map(CityId::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
}

impl Album {
    pub fn new(id: impl Into<AlbumId>, name: impl Into<String>) -> Self {
        Album {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub album_id: AlbumId,
    pub link: String,
}

impl Photo {
    pub fn new(id: impl Into<PhotoId>, album_id: impl Into<AlbumId>, link: impl Into<String>) -> Self {
        Photo {
            id: id.into(),
            album_id: album_id.into(),
            link: link.into(),
        }
    }
}

/// A user tagged in a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub photo_id: PhotoId,
    pub subject_id: UserId,
}

impl Tag {
    pub fn new(photo_id: impl Into<PhotoId>, subject_id: impl Into<UserId>) -> Self {
        Tag {
            photo_id: photo_id.into(),
            subject_id: subject_id.into(),
        }
    }
}
