//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    domain::RoomCategory,
    usecase::{RoomCommand, RoomCommandError},
};

/// Manage chat rooms on a Retro AIM Server.
#[derive(Debug, Parser)]
#[command(
    name = "rasadmin",
    version,
    about = "Manage chat rooms on a Retro AIM Server",
    after_help = "Examples:\n  \
        rasadmin get public                  # List all public chat rooms\n  \
        rasadmin get private                 # List all private chat rooms\n  \
        rasadmin create public \"General Chat\"\n  \
        rasadmin delete public \"General Chat\"\n  \
        rasadmin --config-file myserver.json get public"
)]
pub struct Cli {
    /// Action to perform: 'get' to list rooms, 'create'/'delete' to manage one
    #[arg(value_enum)]
    pub action: ActionArg,

    /// Type of chat room
    #[arg(value_enum)]
    pub category: CategoryArg,

    /// Name of the room (required for 'create' and 'delete')
    pub room_name: Option<String>,

    /// Path to the configuration file
    #[arg(long, default_value = "config.json")]
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Get,
    Create,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Public,
    Private,
}

impl From<CategoryArg> for RoomCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Public => RoomCategory::Public,
            CategoryArg::Private => RoomCategory::Private,
        }
    }
}

impl Cli {
    /// Turn the parsed arguments into one lifecycle command.
    ///
    /// A missing room name for 'create'/'delete' is invalid input, reported
    /// through the same taxonomy as every other failure.
    pub fn into_command(self) -> Result<RoomCommand, RoomCommandError> {
        let category = self.category.into();
        match self.action {
            ActionArg::Get => Ok(RoomCommand::List { category }),
            ActionArg::Create => {
                let name = self.room_name.ok_or_else(|| missing_name("create"))?;
                Ok(RoomCommand::Create { category, name })
            }
            ActionArg::Delete => {
                let name = self.room_name.ok_or_else(|| missing_name("delete"))?;
                Ok(RoomCommand::Delete { category, name })
            }
        }
    }
}

fn missing_name(action: &str) -> RoomCommandError {
    RoomCommandError::InvalidInput {
        reason: format!("room name is required for the '{action}' action"),
    }
}
