//! Test fixtures: an in-process stand-in for the Retro AIM Server REST API.
//!
//! Serves `GET`/`POST /chat/room/{category}` with an in-memory room list,
//! answering with the same status codes as the real server (201/400/409).

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::Mutex};

/// Room names the fixture currently knows, per process.
struct FixtureState {
    rooms: Vec<String>,
    /// When set, list responses are served as a non-JSON body.
    garbled: bool,
}

type SharedState = Arc<Mutex<FixtureState>>;

pub struct TestServer {
    base_url: String,
}

impl TestServer {
    /// Start the fixture server on the given port with no rooms.
    pub async fn start(port: u16) -> Self {
        Self::spawn(port, vec![], false).await
    }

    /// Start the fixture server pre-seeded with rooms.
    pub async fn start_with_rooms(port: u16, rooms: Vec<&str>) -> Self {
        Self::spawn(port, rooms.into_iter().map(String::from).collect(), false).await
    }

    /// Start a fixture server whose list responses are not valid JSON.
    pub async fn start_garbled(port: u16) -> Self {
        Self::spawn(port, vec![], true).await
    }

    async fn spawn(port: u16, rooms: Vec<String>, garbled: bool) -> Self {
        let state: SharedState = Arc::new(Mutex::new(FixtureState { rooms, garbled }));
        let app = Router::new()
            .route("/chat/room/{category}", get(list_rooms).post(create_room))
            .with_state(state);

        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .expect("Failed to bind fixture port");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fixture server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn list_rooms(
    State(state): State<SharedState>,
    Path(_category): Path<String>,
) -> impl IntoResponse {
    let state = state.lock().await;

    if state.garbled {
        return (StatusCode::OK, "this is not json".to_string()).into_response();
    }

    let records: Vec<serde_json::Value> = state
        .rooms
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "create_time": "2024-05-01T12:30:00Z",
                "participants": []
            })
        })
        .collect();
    Json(records).into_response()
}

#[derive(Deserialize)]
struct CreateRoomBody {
    name: String,
}

async fn create_room(
    State(state): State<SharedState>,
    Path(_category): Path<String>,
    Json(body): Json<CreateRoomBody>,
) -> impl IntoResponse {
    // Mimics the server-side room name rule closely enough for the client:
    // names longer than 64 characters are rejected, duplicates conflict.
    if body.name.len() > 64 {
        return (
            StatusCode::BAD_REQUEST,
            "chat room name exceeds 64 characters".to_string(),
        )
            .into_response();
    }

    let mut state = state.lock().await;
    if state.rooms.contains(&body.name) {
        return StatusCode::CONFLICT.into_response();
    }
    state.rooms.push(body.name);
    StatusCode::CREATED.into_response()
}
