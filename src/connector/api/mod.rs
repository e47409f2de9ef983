pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod types;

pub use container::Container;
pub use controller::ChatController;
pub use error::ApiError;
pub use router::{build_router, prepare_frontend_dir};
pub use types::{ChatRequest, ChatResponse, ErrorResponse};
