use super::{non_blank, TextGenerator};
use crate::error::GenerationError;
use async_trait::async_trait;

const PROVIDER: &str = "ollama";

/// Local Ollama server, non-streaming chat.
pub struct OllamaGenerator {
    base_url: String,
    client: reqwest::Client,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: reqwest::Client, base_url: Option<String>, model: String) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| "http://localhost:11434".into())
                .trim_end_matches('/')
                .to_string(),
            client,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": false,
        });

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Unreachable {
                provider: PROVIDER.into(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                provider: PROVIDER.into(),
                status: status.as_u16(),
                body: error_body,
            });
        }

        let resp: serde_json::Value =
            response.json().await.map_err(|e| GenerationError::Malformed {
                provider: PROVIDER.into(),
                message: format!("Failed to parse response: {}", e),
            })?;

        non_blank(resp["message"]["content"].as_str()).ok_or_else(|| GenerationError::Empty {
            provider: PROVIDER.into(),
        })
    }
}
