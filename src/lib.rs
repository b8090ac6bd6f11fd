//! Room administration library for a Retro AIM Server.
//!
//! Lists and creates chat rooms through the server's REST API, and deletes
//! rooms by mutating the server's SQLite store directly (the API has no
//! delete endpoint).

pub mod common;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_cli;
