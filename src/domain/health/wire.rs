//! Wire types for the health endpoint.

use serde::{Deserialize, Serialize};

/// REST response for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
