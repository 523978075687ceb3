//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload for delete responses: `{ "data": { "success": true } }`.
///
/// `success` is always true when the request does not fail; a delete that
/// matches no row is a 404, never a false success.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub success: bool,
}
