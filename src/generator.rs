use std::io::{BufRead, Write};
use tracing::info;

use crate::{
    agent::CompletionProvider,
    error::{AgentError, Result},
    format::Formatter,
    model::{CompletionRequest, GeneratedPaper},
    prompt::{
        prompt_for_abstract, prompt_for_field,
        ABSTRACT_MAX_TOKENS, STOP_SEQUENCE, TITLE_MAX_TOKENS
    },
    utils::read_field
};

/// Asks the provider for a title, then for an abstract continuing that title.
pub struct AbstractGenerator<P> {
    provider: P
}

impl<P: CompletionProvider> AbstractGenerator<P> {
    pub fn new(provider: P) -> Self {
        AbstractGenerator {
            provider
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn generate(&self, field: &str) -> std::result::Result<GeneratedPaper, AgentError> {
        let title_request = CompletionRequest::new(
            prompt_for_field(field), TITLE_MAX_TOKENS, STOP_SEQUENCE);
        let title = self.provider
            .complete(&title_request)
            .await?
            .first_text()?
            .trim_start()
            .to_string();
        info!(%title, "generated title");

        let abstract_request = CompletionRequest::new(
            prompt_for_abstract(field, &title), ABSTRACT_MAX_TOKENS, STOP_SEQUENCE);
        let abstract_text = self.provider
            .complete(&abstract_request)
            .await?
            .first_text()?;
        info!(chars = abstract_text.len(), "generated abstract");

        Ok(GeneratedPaper::new(title, abstract_text))
    }

    /// Writes nothing unless both completions succeed.
    pub async fn generate_to<W: Write>(&self, field: &str, out: &mut W) -> Result<GeneratedPaper> {
        let paper = self.generate(field).await?;
        out.write_all(Formatter::to_console(&paper).as_bytes())?;
        out.flush()?;
        Ok(paper)
    }

    /// Uses `field` when given, otherwise prompts on `out` and reads a line from `input`.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        field: Option<&str>,
        input: &mut R,
        out: &mut W
    ) -> Result<GeneratedPaper> {
        let field = match field {
            Some(field) => field.to_string(),
            None => read_field(input, out)?
        };
        self.generate_to(&field, out).await
    }
}
