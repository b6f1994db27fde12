/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may talk to a completion provider directly.
/// All LLM interactions MUST go through this module.
///
/// Speaks the OpenAI-compatible `chat/completions` protocol, which both the
/// analysis provider and the skill query provider expose. One attempt per call:
/// failures are returned to the caller, never retried here.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ProviderConfig;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no message content")]
    EmptyContent,
}

/// Sampling knobs sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// A configured client for one completion provider.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()?,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a single user message and returns the first choice's text.
    /// The text is returned as sent, even when blank; only a missing message is an error.
    pub async fn call(&self, prompt: &str, params: SamplingParams) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                model = %self.model,
                "Completion API returned a non-success status"
            );
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&raw)
            .map_err(|e| LlmError::UnexpectedResponse(format!("{e}")))?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }

    /// Calls the LLM and deserializes the answer as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        params: SamplingParams,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, params).await?;
        parse_json_answer(&text)
    }
}

/// Parses a model answer as JSON, tolerating code fences and chatter around the object.
pub fn parse_json_answer<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(err) => match outermost_object(text) {
            Some(object) if object.len() != text.len() => {
                serde_json::from_str(object).map_err(LlmError::Parse)
            }
            _ => Err(LlmError::Parse(err)),
        },
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Slice from the first `{` to the last `}`, if both exist in that order.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(&ProviderConfig {
            api_url: format!("{}/chat/completions", server.uri()),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn completion(content: &str) -> Value {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        })
    }

    const PARAMS: SamplingParams = SamplingParams {
        temperature: 0.5,
        max_tokens: Some(1024),
    };

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_json_answer_with_leading_chatter() {
        let value: Value =
            parse_json_answer("Here is the report:\n{\"match_score\": 70}\nThanks!").unwrap();
        assert_eq!(value["match_score"], 70);
    }

    #[test]
    fn test_parse_json_answer_rejects_prose() {
        let result: Result<Value, _> = parse_json_answer("I cannot help with that.");
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_call_sends_openai_shaped_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.5,
                "max_tokens": 1024
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("hi there")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).call("hello", PARAMS).await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_call_omits_max_tokens_when_unset() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .mount(&server)
            .await;

        let params = SamplingParams {
            temperature: 0.7,
            max_tokens: None,
        };
        client_for(&server).call("q", params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_non_success_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).call("q", PARAMS).await.unwrap_err();
        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).call("q", PARAMS).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_blank_answer_is_returned_as_is() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("  \n")))
            .mount(&server)
            .await;

        let text = client_for(&server).call("q", PARAMS).await.unwrap();
        assert_eq!(text, "  \n");
    }

    #[tokio::test]
    async fn test_call_json_blank_answer_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("")))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call_json::<Value>("q", PARAMS)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_call_json_parses_fenced_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("```json\n{\"match_score\": 88}\n```")),
            )
            .mount(&server)
            .await;

        let value: Value = client_for(&server).call_json("q", PARAMS).await.unwrap();
        assert_eq!(value["match_score"], 88);
    }

    #[tokio::test]
    async fn test_call_json_malformed_is_typed_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("not json at all")))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call_json::<Value>("q", PARAMS)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
