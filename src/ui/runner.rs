//! CLI entry point wiring.

use std::{process::ExitCode, sync::Arc};

use clap::Parser;

use crate::{
    config::AppConfig,
    infrastructure::{RestRoomDirectory, SqliteRoomStore},
    ui::{cli::Cli, console},
    usecase::RoomLifecycle,
};

/// Parse the command line, wire the lifecycle façade onto its two
/// backends, execute one command, and render the result.
///
/// Success maps to a zero exit status and failure to a non-zero one.
pub async fn run_cli() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config_file);

    let command = match cli.into_command() {
        Ok(command) => command,
        Err(err) => {
            console::render_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let directory = Arc::new(RestRoomDirectory::new(config.server.base_url.clone()));
    let store = Arc::new(SqliteRoomStore::new(
        &config.store.db_path,
        &config.store.sqlite3_path,
    ));
    let lifecycle = RoomLifecycle::new(directory, store);

    match lifecycle.execute(command).await {
        Ok(outcome) => {
            console::render_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            console::render_error(&err);
            ExitCode::FAILURE
        }
    }
}
