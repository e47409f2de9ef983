pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AnswerQueryUseCase, ChatClient};

pub use connector::{
    build_router, prepare_frontend_dir, ApiError, ChatController, ChatRequest, ChatResponse,
    Container, ErrorResponse, OpenAiCompatibleClient,
};

pub use domain::{
    compose_user_message, Answer, DomainError, Prompt, ProviderConfig, MISSING_KEY_NOTICE,
    SYSTEM_PROMPT,
};
