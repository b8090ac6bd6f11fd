//! Room directory implementations (REST API backend).

pub mod rest;

pub use rest::RestRoomDirectory;
