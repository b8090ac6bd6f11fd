//! Console rendering of command outcomes and errors.
//!
//! All user-facing output goes to stdout; diagnostics go to the tracing
//! subscriber on stderr.

use crate::{
    common::time::format_room_timestamp,
    domain::{Room, RoomCategory},
    usecase::{CommandOutcome, RoomCommandError},
};

const SEPARATOR_WIDTH: usize = 80;

/// Render the outcome of a successful command.
pub fn render_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Listed { category, rooms } => {
            render_room_list(*category, rooms);
            println!(
                "\n✓ Successfully retrieved {} {} chat room(s).",
                rooms.len(),
                category
            );
        }
        CommandOutcome::Created { category, name } => {
            println!(
                "✓ {} chat room '{}' created successfully!",
                capitalized(*category),
                name
            );
        }
        CommandOutcome::Deleted { category, name } => {
            println!(
                "✓ {} chat room '{}' deleted successfully!",
                capitalized(*category),
                name
            );
        }
    }
}

/// Render one failure with its remediation hint where one exists.
pub fn render_error(err: &RoomCommandError) {
    println!("✗ Error: {err}");
    match err {
        RoomCommandError::Unreachable { base_url } => {
            println!("  Make sure the retro AIM server is running at: {base_url}");
        }
        RoomCommandError::UnsupportedOperation => {
            println!("  Only public chat rooms can be created through the API.");
        }
        RoomCommandError::UnexpectedResponse {
            body: Some(body), ..
        } => {
            println!("  Server response: {body}");
        }
        _ => {}
    }
}

fn render_room_list(category: RoomCategory, rooms: &[Room]) {
    println!("\nFound {} {} chat room(s):\n", rooms.len(), category);

    if rooms.is_empty() {
        println!("No {category} chat rooms found.");
        return;
    }

    println!("{}", "-".repeat(SEPARATOR_WIDTH));
    for (index, room) in rooms.iter().enumerate() {
        println!("Room {}: {}", index + 1, room.name);

        if let Some(created) = &room.created_at {
            println!("  Created: {}", format_room_timestamp(created));
        }

        println!("  Participants ({}):", room.participants.len());
        if room.participants.is_empty() {
            println!("    - No participants");
        } else {
            for participant in &room.participants {
                println!("    - {} (ID: {})", participant.screen_name, participant.id);
            }
        }

        println!("{}", "-".repeat(SEPARATOR_WIDTH));
    }
}

fn capitalized(category: RoomCategory) -> &'static str {
    match category {
        RoomCategory::Public => "Public",
        RoomCategory::Private => "Private",
    }
}
