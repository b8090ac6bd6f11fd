//! Core domain models for room administration.

use serde::{Deserialize, Serialize};

use super::value_object::RoomCategory;

/// Represents a chat room as reported by the remote server.
///
/// A `Room` value is constructed transiently per invocation (request or
/// response) and never persisted locally; all durable state lives in the
/// remote server and its backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room category (public or private)
    pub category: RoomCategory,
    /// Room name, the unique identifier within a category as enforced by
    /// the remote systems (not locally)
    pub name: String,
    /// Origin-supplied creation timestamp (RFC 3339 text), advisory only
    pub created_at: Option<String>,
    /// Participants currently in the room, in server-provided order
    pub participants: Vec<Participant>,
}

impl Room {
    /// Create a new room value with no creation time and no participants
    pub fn new(category: RoomCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            created_at: None,
            participants: Vec::new(),
        }
    }
}

/// Represents a participant in a chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display identifier
    pub screen_name: String,
    /// Origin-supplied identifier
    pub id: String,
}

impl Participant {
    /// Create a new participant
    pub fn new(screen_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            id: id.into(),
        }
    }
}
