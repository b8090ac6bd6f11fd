//! Room store implementations (direct SQLite mutation backend).

pub mod sqlite;

pub use sqlite::SqliteRoomStore;
