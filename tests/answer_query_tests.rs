//! Gateway behaviour against in-process chat clients.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mlassist::{
    Answer, AnswerQueryUseCase, ChatClient, DomainError, ProviderConfig, MISSING_KEY_NOTICE,
    SYSTEM_PROMPT,
};

/// Records every prompt it receives and replies with a fixed answer.
struct RecordingChatClient {
    reply: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl RecordingChatClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_user_message(&self) -> String {
        self.prompts
            .lock()
            .unwrap()
            .last()
            .map(|(_, user)| user.clone())
            .expect("at least one prompt recorded")
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }
}

struct FailingChatClient;

#[async_trait]
impl ChatClient for FailingChatClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, DomainError> {
        Err(DomainError::provider("connection reset by peer"))
    }
}

fn configured() -> Arc<ProviderConfig> {
    Arc::new(ProviderConfig::new(Some("pplx-test".to_string())))
}

#[tokio::test]
async fn unconfigured_gateway_returns_notice_without_calling_provider() {
    let client = Arc::new(RecordingChatClient::new("unused"));
    let use_case = AnswerQueryUseCase::new(Arc::new(ProviderConfig::unconfigured()), client.clone());

    let text = use_case.answer("What is overfitting?", "").await;

    assert_eq!(text, MISSING_KEY_NOTICE);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn placeholder_key_behaves_like_missing_key() {
    let client = Arc::new(RecordingChatClient::new("unused"));
    let config = ProviderConfig::new(Some("your_perplexity_api_key_here".to_string()));
    let use_case = AnswerQueryUseCase::new(Arc::new(config), client.clone());

    assert!(!use_case.is_configured());
    assert_eq!(use_case.execute("anything", "col_a").await, Answer::Unconfigured);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn query_without_context_is_sent_verbatim() {
    let client = Arc::new(RecordingChatClient::new("ok"));
    let use_case = AnswerQueryUseCase::new(configured(), client.clone());

    use_case.answer("train a model", "").await;

    assert_eq!(client.calls(), 1);
    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts[0].0, SYSTEM_PROMPT);
    assert_eq!(prompts[0].1, "train a model");
}

#[tokio::test]
async fn dataset_context_is_prepended_in_order() {
    let client = Arc::new(RecordingChatClient::new("ok"));
    let use_case = AnswerQueryUseCase::new(configured(), client.clone());

    use_case.answer("train a model", "col_a,col_b").await;

    let user = client.last_user_message();
    let ctx = user.find("col_a,col_b").expect("context present");
    let instruction = user
        .find("Use these columns and structure in your code.")
        .expect("instruction present");
    let query = user.find("train a model").expect("query present");
    assert!(ctx < instruction && instruction < query);
}

#[tokio::test]
async fn completion_text_passes_through_unchanged() {
    let client = Arc::new(RecordingChatClient::new("Use vectorization."));
    let use_case = AnswerQueryUseCase::new(configured(), client);

    let answer = use_case.execute("loops are slow", "").await;

    assert!(answer.is_completed());
    assert_eq!(answer.into_text(), "Use vectorization.");
}

#[tokio::test]
async fn provider_failure_is_rendered_not_propagated() {
    let use_case = AnswerQueryUseCase::new(configured(), Arc::new(FailingChatClient));

    let answer = use_case.execute("hello", "").await;
    assert!(answer.is_failed());

    let text = answer.into_text();
    assert!(text.contains("AI Error"));
    assert!(text.contains("connection reset by peer"));
}

#[tokio::test]
async fn empty_query_still_reaches_provider() {
    let client = Arc::new(RecordingChatClient::new("Please ask a question."));
    let use_case = AnswerQueryUseCase::new(configured(), client.clone());

    let text = use_case.answer("", "").await;

    assert_eq!(text, "Please ask a question.");
    assert_eq!(client.last_user_message(), "");
}
