//! Identifier types for the snapshot entities

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                $name(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }
    };
}

entity_id!(
    /// Unique, stable identifier for a user
    UserId
);
entity_id!(
    /// Unique identifier for a city
    CityId
);
entity_id!(
    /// Unique identifier for an event
    EventId
);
entity_id!(
    /// Unique identifier for a photo album
    AlbumId
);
entity_id!(
    /// Unique identifier for a photo
    PhotoId
);
