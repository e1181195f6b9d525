use super::{non_blank, TextGenerator};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde_json::Value;

const PROVIDER: &str = "workers_ai";
const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Workers AI over its REST API.
pub struct WorkersAiGenerator {
    client: reqwest::Client,
    base_url: String,
    account_id: String,
    api_token: String,
    model: String,
}

impl WorkersAiGenerator {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<String>,
        account_id: String,
        api_token: String,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            account_id,
            api_token,
            model,
        }
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, self.model
        )
    }
}

/// Pull the reply text out of a Workers AI response.
///
/// The REST API wraps the model output in `result`; bindings return it bare.
/// Either shape may use `response` or `output_text`.
fn extract_text(body: &Value) -> Option<String> {
    let scopes = [&body["result"], body];
    scopes.iter().find_map(|scope| {
        non_blank(scope["response"].as_str()).or_else(|| non_blank(scope["output_text"].as_str()))
    })
}

#[async_trait]
impl TextGenerator for WorkersAiGenerator {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(self.run_url())
            .bearer_auth(&self.api_token)
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

        let resp: Value = response.json().await.map_err(|e| GenerationError::Malformed {
            provider: PROVIDER.into(),
            message: e.to_string(),
        })?;

        extract_text(&resp).ok_or_else(|| GenerationError::Empty {
            provider: PROVIDER.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_rest_envelope() {
        let body = json!({"success": true, "result": {"response": "TOP THEMES\n- a"}});
        assert_eq!(extract_text(&body).as_deref(), Some("TOP THEMES\n- a"));
    }

    #[test]
    fn test_extract_from_bare_shapes() {
        assert_eq!(extract_text(&json!({"response": "r"})).as_deref(), Some("r"));
        assert_eq!(extract_text(&json!({"output_text": "o"})).as_deref(), Some("o"));
    }

    #[test]
    fn test_blank_or_missing_text_is_none() {
        assert_eq!(extract_text(&json!({"result": {"response": "   "}})), None);
        assert_eq!(extract_text(&json!({"result": {"usage": {}}})), None);
        assert_eq!(extract_text(&json!(null)), None);
    }

    #[test]
    fn test_run_url() {
        let gen = WorkersAiGenerator::new(
            reqwest::Client::new(),
            Some("http://localhost:8000/v4/".into()),
            "acct".into(),
            "token".into(),
            "@cf/meta/llama-3.1-8b-instruct".into(),
        );
        assert_eq!(
            gen.run_url(),
            "http://localhost:8000/v4/accounts/acct/ai/run/@cf/meta/llama-3.1-8b-instruct"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let gen = WorkersAiGenerator::new(
            reqwest::Client::new(),
            // Nothing listens on port 9 locally
            Some("http://127.0.0.1:9".into()),
            "acct".into(),
            "token".into(),
            "m".into(),
        );
        let err = gen.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenerationError::Unreachable { .. }));
    }
}
