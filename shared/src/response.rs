//! API response envelopes
//!
//! Wire shapes shared by every endpoint. Success bodies are per-endpoint
//! structs next to their handlers; these are the common pieces.

use serde::{Deserialize, Serialize};

/// Bare acknowledgement response: `{"success": true}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error response body
///
/// `error` carries the caller-facing message; `detail` carries the
/// underlying cause string for downstream (store/upload) failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
