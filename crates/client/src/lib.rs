//! Client-side state for the todo application.
//!
//! Two pieces: a typed HTTP client for the server's API ([`api::ApiClient`])
//! and an in-memory collection that mirrors the server's data between
//! fetches ([`state::TodoList`]). The collection is only ever mutated from
//! completed server responses; a failed request leaves it untouched.

pub mod api;
pub mod state;

pub use api::{ApiClient, ClientError};
pub use state::{Counts, PriorityFilter, StatusFilter, TodoList};
