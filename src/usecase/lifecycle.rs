//! Lifecycle façade: the single entry point used by the CLI.
//!
//! 二つの構造の異なるバックエンド（REST と直接ストア操作）を、一つの
//! コマンド分岐の背後に束ねます。list / create は REST へ、delete は
//! 両カテゴリともストアへルーティングされます。

use std::sync::Arc;

use crate::domain::{Room, RoomCategory, RoomDirectory, RoomName, RoomStore};

use super::{
    CreateRoomUseCase, DeleteRoomUseCase, ListRoomsUseCase, error::RoomCommandError,
};

/// One room administration command, as requested by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomCommand {
    /// List all rooms of a category.
    List { category: RoomCategory },
    /// Create a room (REST-only; refused for the private category).
    Create { category: RoomCategory, name: String },
    /// Delete a room through the direct-store path, for both categories.
    Delete { category: RoomCategory, name: String },
}

/// Successful result of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Listed {
        category: RoomCategory,
        rooms: Vec<Room>,
    },
    Created {
        category: RoomCategory,
        name: RoomName,
    },
    Deleted {
        category: RoomCategory,
        name: RoomName,
    },
}

/// Dispatches room commands to the backend able to serve them and
/// normalizes every failure into [`RoomCommandError`].
pub struct RoomLifecycle {
    list_rooms: ListRoomsUseCase,
    create_room: CreateRoomUseCase,
    delete_room: DeleteRoomUseCase,
}

impl RoomLifecycle {
    /// Wire the façade onto its two backends.
    pub fn new(directory: Arc<dyn RoomDirectory>, store: Arc<dyn RoomStore>) -> Self {
        Self {
            list_rooms: ListRoomsUseCase::new(directory.clone()),
            create_room: CreateRoomUseCase::new(directory),
            delete_room: DeleteRoomUseCase::new(store),
        }
    }

    /// Execute one command and return its normalized outcome.
    pub async fn execute(
        &self,
        command: RoomCommand,
    ) -> Result<CommandOutcome, RoomCommandError> {
        match command {
            RoomCommand::List { category } => {
                let rooms = self.list_rooms.execute(category).await?;
                Ok(CommandOutcome::Listed { category, rooms })
            }
            RoomCommand::Create { category, name } => {
                let name = self.create_room.execute(category, &name).await?;
                Ok(CommandOutcome::Created { category, name })
            }
            RoomCommand::Delete { category, name } => {
                let name = self.delete_room.execute(category, &name).await?;
                Ok(CommandOutcome::Deleted { category, name })
            }
        }
    }
}
