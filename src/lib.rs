pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod model;
pub mod prompt;
pub mod utils;

pub use agent::{CompletionProvider, OpenAIAgent};
pub use config::Config;
pub use generator::AbstractGenerator;
