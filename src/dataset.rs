//! Raw dataset bundle and JSON loading
//!
//! A [`Dataset`] is what an outer loader hands to the engine: every base
//! relation fully materialised. [`Dataset::into_snapshot`] validates it and
//! builds the indexed [`SnapshotStore`].

use crate::snapshot::{
    Album, City, CityRecord, Event, FriendEdge, Photo, SnapshotError, SnapshotStore, Tag, User,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// All base relations of the social network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub cities: Vec<City>,
    pub current_cities: Vec<CityRecord>,
    pub hometown_cities: Vec<CityRecord>,
    pub friends: Vec<FriendEdge>,
    pub events: Vec<Event>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    pub tags: Vec<Tag>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        info!("Loading dataset from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Validate and index into an immutable snapshot
    pub fn into_snapshot(self) -> DatasetResult<SnapshotStore> {
        Ok(SnapshotStore::build(self)?)
    }
}
