use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY not found in env")]
    MissingApiKey,

    #[error("Failed to load env file")]
    Dotenv(#[from] dotenvy::Error),
}

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Open AI Error")]
    OpenAI(#[from] OpenAIError),

    #[error("No completion")]
    NoCompletion,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("No academic field given (end of input)")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, AppError>;
