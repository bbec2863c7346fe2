use serde::{Deserialize, Serialize};

/// Live status payload served by the backend.
/// Fully replaced on every poll; never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub message: String,
}
