//! Response DTOs.
//!
//! Folders, folder nodes, and files are serialized straight from the entity
//! types; only responses with no entity counterpart live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the store is unreachable.
    pub status: String,
    /// Server time.
    pub time: DateTime<Utc>,
    /// Server version.
    pub version: String,
    /// Store reachability.
    pub store: String,
}
