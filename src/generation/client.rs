use anyhow::{Context, Result};
use bytes::Bytes;
use futures_util::Stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::pin::Pin;

use super::language::PromptLanguage;
use super::prompt::build_problem_prompt;

/// A single problem request.
///
/// Fully determined by the session parameters and the first/repeat flag; no
/// conversation history is carried between requests.
#[derive(Debug, Clone)]
pub struct ProblemRequest {
    pub language: PromptLanguage,
    pub difficulty: String,
    pub topics: Vec<String>,
    /// `true` when asking for another problem of the same difficulty.
    pub repeat: bool,
    pub model: String,
}

impl ProblemRequest {
    /// The prompt text sent as the user message.
    pub fn prompt_text(&self) -> String {
        build_problem_prompt(self.language, &self.difficulty, &self.topics, self.repeat)
    }
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints.
///
/// The API key is passed in explicitly at construction; there is no ambient
/// credential state.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Requests one generated problem, returned as a stream of text chunks.
    ///
    /// Each call is a stateless request/response exchange. Failures are not
    /// retried; the caller decides whether to end the session.
    pub async fn problem_stream(
        &self,
        request: &ProblemRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<String>> + Send>>> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let prompt = request.prompt_text();

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![Message {
                role: "user",
                content: Cow::Owned(prompt),
            }],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        Ok(Box::pin(sse_text_stream(response.bytes_stream())))
    }
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Handles buffering across chunk boundaries; stops at the `[DONE]` marker.
fn sse_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {e}"));
                    continue;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == "data: [DONE]" {
                    return;
                }

                if let Some(content) = parse_sse_line(line) {
                    yield Ok(content);
                }
            }
        }
    }
}

/// Parses a single SSE line and extracts the delta text, if any.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() { None } else { Some(content) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"Problem"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Problem".to_string()));
    }

    #[test]
    fn test_parse_sse_line_empty_or_null_content() {
        assert_eq!(
            parse_sse_line(r#"data: {"choices":[{"delta":{"content":""}}]}"#),
            None
        );
        assert_eq!(parse_sse_line(r#"data: {"choices":[{"delta":{}}]}"#), None);
    }

    #[test]
    fn test_parse_sse_line_multiple_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"Two"}},{"delta":{"content":" Sum"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Two Sum".to_string()));
    }

    #[test]
    fn test_parse_sse_line_non_data_lines() {
        assert_eq!(parse_sse_line(""), None);
        assert_eq!(parse_sse_line(": keep-alive comment"), None);
        assert_eq!(parse_sse_line("data: not json"), None);
        assert_eq!(parse_sse_line("data: [DONE]"), None);
    }

    #[test]
    fn test_parse_sse_line_thai_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"โจทย์ข้อที่หนึ่ง"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("โจทย์ข้อที่หนึ่ง".to_string()));
    }

    #[test]
    fn test_request_prompt_text_uses_repeat_flag() {
        let mut request = ProblemRequest {
            language: PromptLanguage::English,
            difficulty: "easy".to_string(),
            topics: vec![],
            repeat: false,
            model: "gpt-4o-mini".to_string(),
        };
        let first = request.prompt_text();

        request.repeat = true;
        let again = request.prompt_text();

        assert!(first.contains("easy"));
        assert_ne!(first, again);
    }
}
