//! JSON envelopes returned by the fixture server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub message: String,
}

/// Response from the `GET /api/*` data routes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Wrap `data` in a successful envelope.
    #[must_use]
    pub const fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
