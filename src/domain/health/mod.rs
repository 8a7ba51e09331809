//! Health domain — backend liveness.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::Serialize;

/// Status string the backend reports when healthy.
pub const STATUS_UP: &str = "UP";

/// Backend liveness as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

impl From<wire::HealthResponse> for HealthStatus {
    fn from(h: wire::HealthResponse) -> Self {
        Self { status: h.status }
    }
}
