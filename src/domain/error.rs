//! Domain layer error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomName validation error
    #[error("room name cannot be empty")]
    RoomNameEmpty,

    /// RoomName whitespace-only error
    #[error("room name cannot be only whitespace")]
    RoomNameWhitespaceOnly,
}

/// Failures of the REST room directory backend.
///
/// Each variant corresponds to one observable outcome of a list or create
/// request; the use case layer maps them 1:1 onto the command error
/// taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The server could not be reached at all (connection failure).
    #[error("could not connect to the server at {base_url}")]
    Unreachable { base_url: String },

    /// The server rejected the request payload (HTTP 400).
    #[error("server rejected the request as invalid")]
    InvalidRequest { body: Option<String> },

    /// A room with the requested name already exists (HTTP 409).
    #[error("room '{name}' already exists")]
    AlreadyExists { name: String },

    /// The server answered with a status this client does not know.
    #[error("unexpected response status {status}")]
    UnexpectedStatus { status: u16, body: Option<String> },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed server payload: {detail}")]
    Protocol { detail: String },
}

/// Failures of the direct-store deletion backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store file does not exist at the configured path.
    #[error("store file not found at {}", .path.display())]
    StoreNotFound { path: PathBuf },

    /// The sqlite3 executable does not exist at the configured path.
    #[error("sqlite3 executable not found at {}", .path.display())]
    ToolNotFound { path: PathBuf },

    /// The invoking principal lacks read or write access to the store file.
    #[error("no read/write access to store file at {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The sqlite3 invocation failed (non-zero exit, launch error, hung
    /// tool, or unusable output), with captured diagnostics.
    #[error("sqlite3 invocation failed: {detail}")]
    ExecutionFailed { detail: String },

    /// The follow-up count query still found matching rows after the
    /// delete statement ran.
    #[error("room '{name}' still present after deletion ({remaining} matching row(s))")]
    DeletionUnverified { name: String, remaining: u64 },
}
