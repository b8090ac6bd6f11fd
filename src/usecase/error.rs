//! UseCase 層のエラー定義
//!
//! The single façade-level error taxonomy. Every backend failure kind maps
//! onto exactly one variant here, with a human-readable explanation;
//! backend-specific error shapes never leak to the caller. All variants are
//! terminal for the current invocation; none are retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DirectoryError, StoreError, ValueObjectError};

/// Outcome taxonomy for a failed room command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomCommandError {
    /// The supplied room name failed validation, or the server rejected
    /// the request payload (HTTP 400).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The requested operation is outside this client's capability for the
    /// requested category (creating private rooms is server-side only).
    #[error("creating private chat rooms is not supported by the server")]
    UnsupportedOperation,

    /// The server could not be reached.
    #[error("could not connect to the server at {base_url}")]
    Unreachable { base_url: String },

    /// The server's payload could not be decoded.
    #[error("error parsing server response: {detail}")]
    ProtocolError { detail: String },

    /// A room with this name already exists.
    #[error("chat room '{name}' already exists")]
    AlreadyExists { name: String },

    /// The server answered with a status this client does not know.
    #[error("unexpected response status: {status}")]
    UnexpectedResponse { status: u16, body: Option<String> },

    /// The backing store file is missing.
    #[error("server store file not found at {}", .path.display())]
    StoreNotFound { path: PathBuf },

    /// The sqlite3 executable is missing.
    #[error("sqlite3 executable not found at {}", .path.display())]
    ToolNotFound { path: PathBuf },

    /// The invoking principal lacks read/write access to the store file.
    #[error(
        "no read/write access to store file at {}: re-run with elevated privileges, \
         adjust the file mode, or join the file's owning group",
        .path.display()
    )]
    PermissionDenied { path: PathBuf },

    /// The external tool invocation failed, with captured diagnostics.
    #[error("store tool invocation failed: {detail}")]
    ToolExecutionFailed { detail: String },

    /// The room persisted despite the delete command appearing to run.
    #[error("room '{name}' is still present after deletion ({remaining} matching row(s))")]
    DeletionUnverified { name: String, remaining: u64 },
}

impl From<ValueObjectError> for RoomCommandError {
    fn from(err: ValueObjectError) -> Self {
        RoomCommandError::InvalidInput {
            reason: err.to_string(),
        }
    }
}

impl From<DirectoryError> for RoomCommandError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Unreachable { base_url } => {
                RoomCommandError::Unreachable { base_url }
            }
            DirectoryError::InvalidRequest { body } => RoomCommandError::InvalidInput {
                reason: match body {
                    Some(body) => format!("server rejected the request: {body}"),
                    None => "server rejected the request".to_string(),
                },
            },
            DirectoryError::AlreadyExists { name } => RoomCommandError::AlreadyExists { name },
            DirectoryError::UnexpectedStatus { status, body } => {
                RoomCommandError::UnexpectedResponse { status, body }
            }
            DirectoryError::Protocol { detail } => RoomCommandError::ProtocolError { detail },
        }
    }
}

impl From<StoreError> for RoomCommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::StoreNotFound { path } => RoomCommandError::StoreNotFound { path },
            StoreError::ToolNotFound { path } => RoomCommandError::ToolNotFound { path },
            StoreError::PermissionDenied { path } => {
                RoomCommandError::PermissionDenied { path }
            }
            StoreError::ExecutionFailed { detail } => {
                RoomCommandError::ToolExecutionFailed { detail }
            }
            StoreError::DeletionUnverified { name, remaining } => {
                RoomCommandError::DeletionUnverified { name, remaining }
            }
        }
    }
}
