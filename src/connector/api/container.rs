use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{AnswerQueryUseCase, ChatClient};
use crate::connector::adapter::OpenAiCompatibleClient;
use crate::domain::ProviderConfig;

/// Wires the provider config into the gateway once at startup.
pub struct Container {
    config: Arc<ProviderConfig>,
    answer_query_use_case: Arc<AnswerQueryUseCase>,
}

impl Container {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = OpenAiCompatibleClient::new(&config)?;
        debug!("Completion endpoint: {}", client.url());
        Ok(Self::with_chat_client(config, Arc::new(client)))
    }

    /// Use an explicit [`ChatClient`] instead of the HTTP one.
    pub fn with_chat_client(config: ProviderConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        let config = Arc::new(config);

        if config.is_configured() {
            info!("Provider configured (model: {})", config.model());
        } else {
            info!("No usable API key; /chat will answer with a setup notice");
        }

        let answer_query_use_case =
            Arc::new(AnswerQueryUseCase::new(Arc::clone(&config), chat_client));

        Self {
            config,
            answer_query_use_case,
        }
    }

    pub fn answer_query_use_case(&self) -> Arc<AnswerQueryUseCase> {
        self.answer_query_use_case.clone()
    }

    pub fn provider_config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_the_config_it_was_built_from() {
        let config = ProviderConfig::new(Some("pplx-test".to_string())).with_model("sonar-pro");
        let container = Container::new(config).expect("container");

        assert!(container.provider_config().is_configured());
        assert_eq!(container.provider_config().model(), "sonar-pro");
        assert!(container.answer_query_use_case().is_configured());
    }

    #[test]
    fn unconfigured_config_builds_unconfigured_gateway() {
        let container = Container::new(ProviderConfig::unconfigured()).expect("container");

        assert!(!container.provider_config().is_configured());
        assert!(!container.answer_query_use_case().is_configured());
    }
}
