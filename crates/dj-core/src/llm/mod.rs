//! Text-generation backends behind a single-method trait.

mod ollama;
mod workers_ai;

pub use ollama::OllamaGenerator;
pub use workers_ai::WorkersAiGenerator;

use crate::error::{DjError, GenerationError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

/// Something that turns a prompt into text. May fail.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider id, used in logs and errors.
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message and return the reply text.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

/// Generator that always fails, so every briefing is the fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _prompt: &str) -> std::result::Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    WorkersAi,
    Ollama,
    Disabled,
}

/// Everything needed to build a generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub base_url: Option<String>,
    pub account_id: Option<String>,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::WorkersAi,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            account_id: None,
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Build the configured generator.
pub fn build_generator(config: &GeneratorConfig) -> Result<Arc<dyn TextGenerator>> {
    let client = || {
        reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DjError::Validation(format!("Failed to build HTTP client: {}", e)))
    };

    let generator: Arc<dyn TextGenerator> = match config.provider {
        ProviderKind::WorkersAi => {
            let account_id = config.account_id.clone().ok_or_else(|| {
                DjError::Validation("Workers AI needs an account id".to_string())
            })?;
            let api_token = config.api_token.clone().ok_or_else(|| {
                DjError::Validation("Workers AI needs an API token".to_string())
            })?;
            Arc::new(WorkersAiGenerator::new(
                client()?,
                config.base_url.clone(),
                account_id,
                api_token,
                config.model.clone(),
            ))
        }
        ProviderKind::Ollama => Arc::new(OllamaGenerator::new(
            client()?,
            config.base_url.clone(),
            config.model.clone(),
        )),
        ProviderKind::Disabled => Arc::new(DisabledGenerator),
    };

    log::info!("Text generator: {} ({})", generator.name(), config.model);
    Ok(generator)
}

/// Keep `s` only if it has visible content.
fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|t| !t.trim().is_empty()).map(str::to_string)
}
