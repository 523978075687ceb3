//! Typed HTTP client for the todo API.
//!
//! Wraps the server's JSON endpoints using [`reqwest`], decoding the
//! `{ "data": ... }` envelope and mapping the server's error payloads
//! (`{ "error": ..., "code": ... }`) onto a typed error.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use doable_core::types::DbId;
use doable_db::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Errors surfaced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server reported the target todo does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the input before touching the store.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other non-2xx response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
}

/// The `{ "data": T }` envelope used by every successful response.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Error body shape: `{ "error": ..., "code": ... }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: String,
}

/// Payload of a successful delete: `{ "success": true }`.
#[derive(Debug, Deserialize)]
struct DeleteResult {
    success: bool,
}

/// HTTP client for one todo API server.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch all todos, most recently created first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/todos", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch a single todo. `Ok(None)` when no todo has that id.
    pub async fn get_todo(&self, id: DbId) -> Result<Option<Todo>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/todos/{id}", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a todo, returning the stored record with its assigned id.
    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/todos", self.base_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Partially update a todo, returning the post-update record.
    pub async fn update_todo(&self, id: DbId, input: &UpdateTodo) -> Result<Todo, ClientError> {
        let response = self
            .client
            .put(format!("{}/api/v1/todos/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a todo. The returned flag is always true on success; a
    /// missing id surfaces as [`ClientError::NotFound`].
    pub async fn delete_todo(&self, id: DbId) -> Result<bool, ClientError> {
        let response = self
            .client
            .delete(format!("{}/api/v1/todos/{id}", self.base_url))
            .send()
            .await?;
        let result: DeleteResult = Self::parse_response(response).await?;
        Ok(result.success)
    }

    // ---- private helpers ----

    /// Unwrap the data envelope on success, or map the error body onto a
    /// [`ClientError`] by its `code`.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let envelope: DataEnvelope<T> = response.json().await?;
            return Ok(envelope.data);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => {
                match body.code.as_str() {
                    "NOT_FOUND" => return Err(ClientError::NotFound(body.error)),
                    "VALIDATION_ERROR" => return Err(ClientError::InvalidInput(body.error)),
                    _ => {}
                }
                body.error
            }
            Err(_) => status.to_string(),
        };

        tracing::warn!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
