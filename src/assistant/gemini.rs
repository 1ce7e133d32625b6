//! Client for the Gemini `generateContent` endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::domain::{DomainError, GenerativeModel};
use crate::infrastructure::config::GeminiConfig;

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ]
    })
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::External("GEMINI_API_KEY is not set".to_string()))?;

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key
                DomainError::External(format!("Gemini API request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DomainError::External(format!(
                "Gemini API error: {} - {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            DomainError::External(format!(
                "Failed to parse Gemini response: {}",
                e.without_url()
            ))
        })?;

        response_json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::External("Gemini response contained no text candidate".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model_name() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "http://localhost:1234/".to_string(),
            ..GeminiConfig::default()
        })
        .unwrap();

        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_wraps_prompt_as_user_turn() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeminiConfig::default()
        })
        .unwrap();

        let result = client.generate("anything").await;
        assert!(matches!(result, Err(DomainError::External(msg)) if msg.contains("GEMINI_API_KEY")));
    }
}
