use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::domain::{Answer, Prompt, ProviderConfig};

/// Answers one user query with exactly one provider call.
///
/// Never fails: a missing key and a failed call are both returned as an
/// [`Answer`] and rendered to text by [`Self::answer`].
pub struct AnswerQueryUseCase {
    config: Arc<ProviderConfig>,
    chat_client: Arc<dyn ChatClient>,
}

impl AnswerQueryUseCase {
    pub fn new(config: Arc<ProviderConfig>, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            config,
            chat_client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub async fn execute(&self, query: &str, dataset_context: &str) -> Answer {
        if !self.config.is_configured() {
            debug!("Provider not configured; skipping completion request");
            return Answer::Unconfigured;
        }

        let prompt = Prompt::new(query, dataset_context);
        debug!(
            "Answering query ({} chars, dataset_context={})",
            query.len(),
            !dataset_context.is_empty()
        );

        let start_time = Instant::now();
        match self.chat_client.complete(prompt.system(), prompt.user()).await {
            Ok(text) => {
                info!(
                    "Completion received from {} in {:?}",
                    self.config.model(),
                    start_time.elapsed()
                );
                Answer::Completed(text)
            }
            Err(e) => {
                warn!("Completion request failed after {:?}: {e}", start_time.elapsed());
                Answer::Failed(e.to_string())
            }
        }
    }

    /// Text-only entry point used by the HTTP layer.
    pub async fn answer(&self, query: &str, dataset_context: &str) -> String {
        self.execute(query, dataset_context).await.into_text()
    }
}
