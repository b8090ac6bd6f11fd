//! Direct-store room deletion through the sqlite3 shell.
//!
//! The server's REST API offers no delete endpoint for either room
//! category, so deletion mutates the backing SQLite file directly. The
//! delete statement's own exit status cannot distinguish "matched and
//! deleted" from "matched zero rows"; a follow-up count query is the sole
//! success criterion.

use std::{fs::OpenOptions, io::ErrorKind, path::PathBuf, time::Duration};

use async_trait::async_trait;
use tokio::{process::Command, time::timeout};

use crate::domain::{RoomCategory, RoomName, RoomStore, StoreError};

/// Room table in the server's SQLite schema.
const ROOM_TABLE: &str = "chatRoom";

/// Ceiling on a single sqlite3 invocation, guarding against a hung tool.
const TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Deletes rooms by invoking the sqlite3 shell against the server's
/// backing store file.
///
/// Holds only the two configured paths; no lock is held on the store file
/// beyond the duration of a single delete-then-verify sequence.
pub struct SqliteRoomStore {
    db_path: PathBuf,
    sqlite3_path: PathBuf,
}

impl SqliteRoomStore {
    /// Create a new store mutator for the given store file and tool paths.
    pub fn new(db_path: impl Into<PathBuf>, sqlite3_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            sqlite3_path: sqlite3_path.into(),
        }
    }

    /// Pre-flight checks, each a distinct failure mode: store file exists,
    /// tool exists, store file opens for read and write.
    fn preflight(&self) -> Result<(), StoreError> {
        if !self.db_path.exists() {
            return Err(StoreError::StoreNotFound {
                path: self.db_path.clone(),
            });
        }
        if !self.sqlite3_path.exists() {
            return Err(StoreError::ToolNotFound {
                path: self.sqlite3_path.clone(),
            });
        }
        match OpenOptions::new().read(true).write(true).open(&self.db_path) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(StoreError::PermissionDenied {
                    path: self.db_path.clone(),
                })
            }
            Err(err) => Err(StoreError::ExecutionFailed {
                detail: format!("cannot open store file {}: {}", self.db_path.display(), err),
            }),
        }
    }

    /// Run one SQL statement through the sqlite3 shell and return its
    /// stdout, bounded by [`TOOL_TIMEOUT`].
    async fn run_sql(&self, statement: &str) -> Result<String, StoreError> {
        tracing::debug!(tool = %self.sqlite3_path.display(), %statement, "invoking sqlite3");

        let invocation = Command::new(&self.sqlite3_path)
            .arg(&self.db_path)
            .arg(statement)
            .kill_on_drop(true)
            .output();

        let output = timeout(TOOL_TIMEOUT, invocation)
            .await
            .map_err(|_| StoreError::ExecutionFailed {
                detail: format!(
                    "sqlite3 did not finish within {} seconds",
                    TOOL_TIMEOUT.as_secs()
                ),
            })?
            .map_err(|err| StoreError::ExecutionFailed {
                detail: format!("failed to launch {}: {}", self.sqlite3_path.display(), err),
            })?;

        if !output.status.success() {
            return Err(StoreError::ExecutionFailed {
                detail: captured_diagnostics(&output),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl RoomStore for SqliteRoomStore {
    async fn delete(&self, name: &RoomName, category: RoomCategory) -> Result<(), StoreError> {
        self.preflight()?;

        tracing::debug!(room = name.as_str(), %category, "deleting room from store");
        self.run_sql(&delete_statement(name.as_str())).await?;

        // The delete statement reports success even when it matched zero
        // rows; only a zero count on re-query proves the room is gone.
        let stdout = self.run_sql(&count_statement(name.as_str())).await?;
        let remaining: u64 =
            stdout
                .trim()
                .parse()
                .map_err(|_| StoreError::ExecutionFailed {
                    detail: format!("unexpected count output from sqlite3: {:?}", stdout.trim()),
                })?;

        if remaining > 0 {
            return Err(StoreError::DeletionUnverified {
                name: name.as_str().to_string(),
                remaining,
            });
        }

        tracing::debug!(room = name.as_str(), "deletion verified by re-query");
        Ok(())
    }
}

/// Double any single quotes before interpolating into statement text; the
/// sqlite3 shell has no parameter binding.
fn escape_sql_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

fn delete_statement(name: &str) -> String {
    format!(
        "DELETE FROM {ROOM_TABLE} WHERE name = '{}';",
        escape_sql_literal(name)
    )
}

fn count_statement(name: &str) -> String {
    format!(
        "SELECT COUNT(*) FROM {ROOM_TABLE} WHERE name = '{}';",
        escape_sql_literal(name)
    )
}

fn captured_diagnostics(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut detail = format!("sqlite3 exited with {}", output.status);
    if !stderr.trim().is_empty() {
        detail.push_str(": ");
        detail.push_str(stderr.trim());
    }
    if !stdout.trim().is_empty() {
        detail.push_str(" (stdout: ");
        detail.push_str(stdout.trim());
        detail.push(')');
    }
    detail
}
