use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, error};

use super::super::error::ApiError;
use super::super::types::{ChatRequest, ChatResponse};
use super::super::Container;

#[derive(Clone)]
pub struct ChatController {
    container: Arc<Container>,
}

impl ChatController {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// Run the gateway on its own task so a panic inside it surfaces as a
    /// 500 instead of tearing down the connection.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        let use_case = self.container.answer_query_use_case();
        let ChatRequest {
            query,
            dataset_context,
        } = request;

        let response = tokio::spawn(async move { use_case.answer(&query, &dataset_context).await })
            .await
            .map_err(|e| {
                error!("Chat task failed: {e}");
                ApiError::internal(e.to_string())
            })?;

        Ok(ChatResponse { response })
    }
}

/// `POST /chat`
pub async fn handle_chat(
    State(controller): State<ChatController>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected /chat body: {}", rejection.body_text());
        ApiError::invalid_request(rejection.status(), rejection.body_text())
    })?;

    controller.chat(request).await.map(Json)
}
