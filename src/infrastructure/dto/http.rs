//! HTTP wire records for the room collection endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{Participant, Room, RoomCategory};

/// One room record as returned by `GET /chat/room/{category}`.
///
/// `create_time` and `participants` are optional on the wire; a missing
/// field decodes into an absent/empty value, never a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecordDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<ParticipantRecordDto>>,
}

impl RoomRecordDto {
    /// Convert the wire record into a domain `Room` of the given category.
    pub fn into_room(self, category: RoomCategory) -> Room {
        Room {
            category,
            name: self.name,
            created_at: self.create_time,
            participants: self
                .participants
                .unwrap_or_default()
                .into_iter()
                .map(ParticipantRecordDto::into_participant)
                .collect(),
        }
    }
}

/// One participant record inside a room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecordDto {
    pub screen_name: String,
    pub id: String,
}

impl ParticipantRecordDto {
    fn into_participant(self) -> Participant {
        Participant {
            screen_name: self.screen_name,
            id: self.id,
        }
    }
}

/// Request body for `POST /chat/room/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequestDto {
    pub name: String,
}
