//! REST room directory backed by the server's `/chat/room/{category}`
//! resource collections.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    domain::{DirectoryError, Room, RoomCategory, RoomDirectory, RoomName},
    infrastructure::dto::http::{CreateRoomRequestDto, RoomRecordDto},
};

/// Room directory client for the server's REST API.
///
/// Holds only the base URL and a reqwest client; no state is retained
/// between calls.
pub struct RestRoomDirectory {
    base_url: String,
    http: reqwest::Client,
}

impl RestRoomDirectory {
    /// Create a new directory client for the given base URL.
    ///
    /// The base URL is treated as an opaque string; its shape is not
    /// validated here.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Full endpoint URL for the category-scoped room collection.
    fn collection_endpoint(&self, category: RoomCategory) -> String {
        format!("{}/chat/room/{}", self.base_url, category.as_str())
    }

    /// Map a reqwest send failure onto the directory taxonomy.
    fn send_failure(&self, err: reqwest::Error) -> DirectoryError {
        tracing::warn!(error = %err, base_url = %self.base_url, "request failed");
        DirectoryError::Unreachable {
            base_url: self.base_url.clone(),
        }
    }
}

/// Read the response body, treating an empty body as absent.
async fn response_body(response: reqwest::Response) -> Option<String> {
    response.text().await.ok().filter(|body| !body.is_empty())
}

#[async_trait]
impl RoomDirectory for RestRoomDirectory {
    async fn list(&self, category: RoomCategory) -> Result<Vec<Room>, DirectoryError> {
        let endpoint = self.collection_endpoint(category);
        tracing::debug!(%endpoint, "fetching room list");

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|err| self.send_failure(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                body: response_body(response).await,
            });
        }

        let records: Vec<RoomRecordDto> =
            response.json().await.map_err(|err| DirectoryError::Protocol {
                detail: err.to_string(),
            })?;

        Ok(records
            .into_iter()
            .map(|record| record.into_room(category))
            .collect())
    }

    async fn create(
        &self,
        category: RoomCategory,
        name: &RoomName,
    ) -> Result<(), DirectoryError> {
        let endpoint = self.collection_endpoint(category);
        let payload = CreateRoomRequestDto {
            name: name.as_str().to_string(),
        };
        tracing::debug!(%endpoint, room = name.as_str(), "creating room");

        let response = self
            .http
            .post(&endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| self.send_failure(err))?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            StatusCode::BAD_REQUEST => Err(DirectoryError::InvalidRequest {
                body: response_body(response).await,
            }),
            StatusCode::CONFLICT => Err(DirectoryError::AlreadyExists {
                name: name.as_str().to_string(),
            }),
            status => Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                body: response_body(response).await,
            }),
        }
    }
}
