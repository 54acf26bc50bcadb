use async_openai::config::OpenAIConfig;
use dotenvy;
use std::{env, path::Path};
use tracing::debug;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
pub const DEFAULT_ENV_FILE: &str = ".env";

// completions-endpoint model. the old `davinci` engine is retired.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>
}

impl Config {
    pub fn new(api_key: &str, model: &str, api_base: Option<&str>) -> Self {
        Config {
            api_key: api_key.to_string(),
            model: model.to_string(),
            api_base: api_base.map(String::from)
        }
    }

    /// Loads `env_file` (which must exist) or an optional `.env` in the
    /// working directory, then reads the process environment.
    pub fn from_env(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                debug!("loaded env file {}", path.display());
            }
            // parent directories are not searched.
            None => match dotenvy::from_path(DEFAULT_ENV_FILE) {
                Ok(()) => debug!("loaded env file {}", DEFAULT_ENV_FILE),
                Err(e) if e.not_found() => {}
                Err(e) => return Err(e.into())
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let api_key = get_non_empty(&lookup, API_KEY_VAR)
            .ok_or(ConfigError::MissingApiKey)?;
        let model = get_non_empty(&lookup, MODEL_VAR)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = get_non_empty(&lookup, API_BASE_VAR);
        Ok(Config {
            api_key,
            model,
            api_base
        })
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    pub fn openai_config(&self) -> OpenAIConfig {
        let config = OpenAIConfig::new().with_api_key(self.api_key.as_str());
        match &self.api_base {
            Some(base) => config.with_api_base(base.as_str()),
            None => config
        }
    }
}

fn get_non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
