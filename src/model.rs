use async_openai::types::{CompletionFinishReason, CreateCompletionResponse};

use crate::error::AgentError;

// parameters for a single completion call.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub stop: String
}

impl CompletionRequest {
    pub fn new(prompt: String, max_tokens: u32, stop: &str) -> Self {
        CompletionRequest {
            prompt,
            max_tokens,
            stop: stop.to_string()
        }
    }
}

// typed completion response. only the first alternative is ever consumed.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub alternatives: Vec<Alternative>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub text: String,
    /// the service hit the token cap before a stop sequence.
    pub truncated: bool
}

impl Alternative {
    pub fn new(text: &str) -> Self {
        Alternative {
            text: text.to_string(),
            truncated: false
        }
    }
}

impl Completion {
    pub fn single(text: &str) -> Self {
        Completion {
            alternatives: vec![ Alternative::new(text) ]
        }
    }

    pub fn first(&self) -> Option<&Alternative> {
        self.alternatives.first()
    }

    pub fn first_text(self) -> Result<String, AgentError> {
        self.alternatives
            .into_iter()
            .next()
            .map(|alt| alt.text)
            .ok_or(AgentError::NoCompletion)
    }
}

impl From<CreateCompletionResponse> for Completion {
    fn from(response: CreateCompletionResponse) -> Self {
        let alternatives = response.choices.into_iter()
            .map(|choice| Alternative {
                text: choice.text,
                truncated: matches!(choice.finish_reason, Some(CompletionFinishReason::Length))
            })
            .collect();
        Completion { alternatives }
    }
}

// the two strings a run produces.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPaper {
    pub title: String,
    pub abstract_text: String
}

impl GeneratedPaper {
    pub fn new(title: String, abstract_text: String) -> Self {
        GeneratedPaper {
            title,
            abstract_text
        }
    }
}
