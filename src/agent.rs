use async_openai::{
    config::OpenAIConfig,
    types::CreateCompletionRequestArgs,
    Client as OpenAIClient
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::AgentError,
    model::{Completion, CompletionRequest}
};

/// A hosted text-completion capability.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AgentError>;
}

pub struct OpenAIAgent {
    client: OpenAIClient<OpenAIConfig>,
    model: String
}

impl OpenAIAgent {
    pub fn new(client: OpenAIClient<OpenAIConfig>, model: &str) -> Self {
        OpenAIAgent {
            client,
            model: model.to_string()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = OpenAIClient::with_config(config.openai_config());
        Self::new(client, &config.model)
    }
}

#[async_trait]
impl CompletionProvider for OpenAIAgent {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AgentError> {
        let body = CreateCompletionRequestArgs::default()
            .model(self.model.as_str())
            .prompt(request.prompt.as_str())
            .max_tokens(request.max_tokens)
            .stop(request.stop.as_str())
            .build()?;

        debug!(model = %self.model, max_tokens = request.max_tokens, "requesting completion");
        let completion: Completion = self.client
            .completions()
            .create(body)
            .await?
            .into();

        if completion.first().is_some_and(|alt| alt.truncated) {
            warn!(max_tokens = request.max_tokens, "completion stopped at the token cap");
        }
        Ok(completion)
    }
}
