//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_room;
pub mod delete_room;
pub mod error;
pub mod lifecycle;
pub mod list_rooms;

pub use create_room::CreateRoomUseCase;
pub use delete_room::DeleteRoomUseCase;
pub use error::RoomCommandError;
pub use lifecycle::{CommandOutcome, RoomCommand, RoomLifecycle};
pub use list_rooms::ListRoomsUseCase;
