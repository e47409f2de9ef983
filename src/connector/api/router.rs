use std::path::Path;

use axum::routing::post;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::domain::DomainError;

use super::controller::chat_controller::handle_chat;
use super::controller::ChatController;

/// `POST /chat` plus static files from `frontend_dir` for every other path.
pub fn build_router(controller: ChatController, frontend_dir: &Path) -> axum::Router {
    axum::Router::new()
        .route("/chat", post(handle_chat))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(controller)
}

/// Create the asset directory if it does not exist yet.
pub fn prepare_frontend_dir(frontend_dir: &Path) -> Result<(), DomainError> {
    if !frontend_dir.exists() {
        std::fs::create_dir_all(frontend_dir)?;
    }
    Ok(())
}
