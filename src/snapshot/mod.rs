//! Immutable in-memory snapshot of the social-network dataset
//!
//! This module holds the base relations and every index the analytics
//! operations read from:
//! - Users, cities, events, albums and photos keyed by id
//! - The friendship graph as a dense undirected adjacency view
//! - Grouping indexes by first name, birth month, hometown, tagged photo,
//!   album and event state

pub mod entity;
pub mod store;
pub mod types;

// Re-export main types
pub use entity::{Album, BirthDate, City, CityRecord, Event, FriendEdge, Photo, Tag, User};
pub use store::{SnapshotError, SnapshotResult, SnapshotStore};
pub use types::{AlbumId, CityId, EventId, PhotoId, UserId};
