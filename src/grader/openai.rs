//! OpenAI Chat Completions 연동
//!
//! `POST {base_url}/chat/completions` 로 프롬프트 1건을 보내고
//! 첫 번째 choice의 본문을 돌려준다.

use crate::config::OpenAiConfig;
use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat Completions 클라이언트
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    settings: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(settings: &OpenAiConfig, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds.max(1)))
            .build()?;

        Ok(Self {
            http,
            api_key,
            settings: settings.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }

    /// 프롬프트 1건 전송
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        tracing::debug!(
            "채점 요청: {} (model={}, prompt={} chars)",
            self.endpoint(),
            self.settings.model,
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuizError::ApiCall(format!("status {}: {}", status, body.trim())));
        }

        let body = response.text().await?;
        let text = extract_content(&body)?;
        tracing::debug!("채점 응답: {} chars", text.len());
        Ok(text)
    }
}

/// 응답 JSON에서 choices[0].message.content 추출
pub fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| QuizError::ApiParse(format!("응답 JSON 오류: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| QuizError::ApiParse("응답에 내용이 없습니다".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"| 1 | apple | O |"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "| 1 | apple | O |");
    }

    #[test]
    fn test_extract_content_without_choices() {
        let result = extract_content(r#"{"choices": []}"#);
        assert!(matches!(result, Err(QuizError::ApiParse(_))));

        let result = extract_content(r#"{"error": {"message": "bad"}}"#);
        assert!(matches!(result, Err(QuizError::ApiParse(_))));
    }

    #[test]
    fn test_extract_content_null_or_blank() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(extract_content(body).is_err());

        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#;
        assert!(extract_content(body).is_err());
    }

    #[test]
    fn test_extract_content_invalid_json() {
        assert!(matches!(extract_content("<html>"), Err(QuizError::ApiParse(_))));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = OpenAiConfig {
            base_url: "http://localhost:8080/v1/".into(),
            ..Default::default()
        };
        let client = OpenAiClient::new(&settings, "sk-test".into()).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage { role: "user", content: "hi" }],
            temperature: 0.5,
            max_tokens: 100,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
        assert_eq!(value["max_tokens"], 100);
    }
}
