use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub query: String,
    /// Free-text description of the user's dataset; empty when absent.
    #[serde(default)]
    pub dataset_context: String,
}

/// Success envelope: the answer, notice, or rendered provider error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error envelope for rejected or failed requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
