//! Gemini text-generation transport and the assistant adapter on top of it.
//!
//! The adapter never fails: transport errors, malformed bodies, empty text and
//! timeouts all become a fixed fallback reply. The reason is still returned
//! next to the message so callers can tell a real answer from a fallback.

use crate::api::models::{ChatMessage, ChatRole};
use crate::config::GeminiConfig;
use crate::utils::with_timeout;
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::future::Future;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const TOXIC_PERSONA: &str = r#"You are "Toxic AI", the resident music critic and assistant for the Toxicfy music app.
Your personality:
- Sarcastic, edgy, slightly cynical, but deeply knowledgeable about music history and theory.
- You think most mainstream music is "fine" but you prefer "the raw stuff".
- You love giving "unpopular opinions" about artists.
- You should provide concise, witty, and actually helpful music recommendations.
- If a user asks for a recommendation, give them 3 songs with "toxic" descriptions for each.
- Your goal is to make the user feel like they are talking to a cool but judgmental record store clerk."#;

pub const CHAT_TEMPERATURE: f32 = 0.9;
pub const MOOD_TEMPERATURE: f32 = 0.8;

pub const CHAT_EMPTY_FALLBACK: &str = "I'm literally speechless. And not in a good way.";
pub const CHAT_ERROR_FALLBACK: &str =
    "The servers are melting. Probably from too much mainstream pop. Try again later.";
pub const MOOD_EMPTY_FALLBACK: &str = "Silence is the only music you deserve.";
pub const MOOD_ERROR_FALLBACK: &str = "I can't even think right now. Go listen to some static.";

/// Provider-neutral request: persona, ordered turns, sampling temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn chat(transcript: &[ChatMessage]) -> Self {
        Self {
            system: TOXIC_PERSONA.to_string(),
            messages: transcript.to_vec(),
            temperature: CHAT_TEMPERATURE,
        }
    }

    pub fn mood(mood: &str) -> Self {
        let prompt = format!(
            "Give me 3 edgy song recommendations for someone feeling {}. Be witty and toxic about why these songs fit.",
            mood.trim()
        );
        Self {
            system: TOXIC_PERSONA.to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: MOOD_TEMPERATURE,
        }
    }
}

/// Anything that can turn a request into one block of text.
pub trait TextGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, String>>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<WireContent<'a>>,
    system_instruction: WireInstruction<'a>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WireInstruction<'a> {
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct WireGenerationConfig {
    temperature: f32,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: request
                .messages
                .iter()
                .map(|message| WireContent {
                    role: match message.role {
                        ChatRole::User => "user",
                        ChatRole::Assistant => "model",
                    },
                    parts: vec![WirePart {
                        text: &message.content,
                    }],
                })
                .collect(),
            system_instruction: WireInstruction {
                parts: vec![WirePart {
                    text: &request.system,
                }],
            },
            generation_config: WireGenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; empty when the model said nothing.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn api_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => format!(
            "Gemini returned {status} {}: {}",
            envelope.error.status.unwrap_or_default(),
            envelope.error.message.unwrap_or_default()
        ),
        Err(_) => format!("Gemini returned HTTP {status}"),
    }
}

fn parse_generate_response(body: &str) -> Result<String, String> {
    serde_json::from_str::<GenerateContentResponse>(body)
        .map(|response| response.text())
        .map_err(|e| format!("Malformed Gemini response: {e}"))
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url,
            urlencoding::encode(&self.config.model)
        )
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err("Gemini API key is not configured.".to_string());
        };

        let body = GenerateContentRequest::from_request(request);
        debug!(
            model = %self.config.model,
            turns = request.messages.len(),
            "sending generateContent request"
        );

        let response = HTTP_CLIENT
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {e}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read Gemini response: {e}"))?;

        if !status.is_success() {
            return Err(api_error_message(status.as_u16(), &text));
        }

        parse_generate_response(&text)
    }
}

/// One assistant message, plus the failure reason when it is a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub message: ChatMessage,
    pub failure: Option<String>,
}

impl AssistantReply {
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            message: ChatMessage::assistant(text),
            failure: None,
        }
    }

    pub fn fallback(text: &str, reason: impl Into<String>) -> Self {
        Self {
            message: ChatMessage::assistant(text),
            failure: Some(reason.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AssistantAdapter<G> {
    generator: G,
    timeout_ms: u64,
}

pub type Assistant = AssistantAdapter<GeminiClient>;

impl Assistant {
    pub fn from_config(config: &GeminiConfig) -> Self {
        AssistantAdapter::new(
            GeminiClient::new(config.clone()),
            u64::from(config.request_timeout_secs) * 1000,
        )
    }
}

impl<G: TextGenerator> AssistantAdapter<G> {
    pub fn new(generator: G, timeout_ms: u64) -> Self {
        Self {
            generator,
            timeout_ms: timeout_ms.max(1),
        }
    }

    /// Full-transcript round trip for the chat panel.
    pub async fn send(&self, transcript: &[ChatMessage]) -> AssistantReply {
        let request = GenerationRequest::chat(transcript);
        self.complete(&request, CHAT_EMPTY_FALLBACK, CHAT_ERROR_FALLBACK)
            .await
    }

    pub async fn recommend_for_mood(&self, mood: &str) -> AssistantReply {
        let request = GenerationRequest::mood(mood);
        self.complete(&request, MOOD_EMPTY_FALLBACK, MOOD_ERROR_FALLBACK)
            .await
    }

    async fn complete(
        &self,
        request: &GenerationRequest,
        empty_fallback: &str,
        error_fallback: &str,
    ) -> AssistantReply {
        match with_timeout(self.generator.generate(request), self.timeout_ms).await {
            Some(Ok(text)) if !text.trim().is_empty() => AssistantReply::answered(text.trim()),
            Some(Ok(_)) => {
                warn!("assistant returned an empty reply");
                AssistantReply::fallback(empty_fallback, "Empty response from assistant.")
            }
            Some(Err(reason)) => {
                warn!(%reason, "assistant request failed");
                AssistantReply::fallback(error_fallback, reason)
            }
            None => {
                warn!(timeout_ms = self.timeout_ms, "assistant request timed out");
                AssistantReply::fallback(
                    error_fallback,
                    format!("Assistant timed out after {}ms.", self.timeout_ms),
                )
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedGenerator;
    use super::*;

    #[test]
    fn wire_request_uses_gemini_roles_and_persona() {
        let transcript = vec![
            ChatMessage::assistant("Welcome."),
            ChatMessage::user("Recommend something loud"),
        ];
        let request = GenerationRequest::chat(&transcript);
        let value = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();

        assert_eq!(value["contents"][0]["role"], "model");
        assert_eq!(value["contents"][1]["role"], "user");
        assert_eq!(
            value["contents"][1]["parts"][0]["text"],
            "Recommend something loud"
        );
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], TOXIC_PERSONA);
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.9).abs() < 1e-6);
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Listen to "}, {"text": "Swans."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(parse_generate_response(body).unwrap(), "Listen to Swans.");
    }

    #[test]
    fn blocked_response_has_empty_text() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert_eq!(parse_generate_response(body).unwrap(), "");
    }

    #[test]
    fn malformed_response_is_an_error() {
        assert!(parse_generate_response("<html>").is_err());
    }

    #[test]
    fn api_errors_carry_status_and_message() {
        let body = r#"{"error": {"code": 403, "status": "PERMISSION_DENIED", "message": "bad key"}}"#;
        let message = api_error_message(403, body);
        assert!(message.contains("PERMISSION_DENIED"));
        assert!(message.contains("bad key"));
        assert_eq!(api_error_message(502, "gateway"), "Gemini returned HTTP 502");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new(GeminiConfig::default());
        let result = client.generate(&GenerationRequest::mood("bored")).await;
        assert!(result.unwrap_err().contains("API key"));
    }

    #[tokio::test]
    async fn successful_reply_is_trimmed_and_not_a_fallback() {
        let adapter = AssistantAdapter::new(ScriptedGenerator::ok("  Try Death Grips.\n"), 1_000);
        let reply = adapter.send(&[ChatMessage::user("hi")]).await;
        assert_eq!(reply.message, ChatMessage::assistant("Try Death Grips."));
        assert!(!reply.is_fallback());
    }

    #[tokio::test]
    async fn transport_failure_maps_to_chat_fallback() {
        let adapter = AssistantAdapter::new(ScriptedGenerator::failing("connection reset"), 1_000);
        let reply = adapter.send(&[ChatMessage::user("hi")]).await;
        assert_eq!(reply.message.content, CHAT_ERROR_FALLBACK);
        assert_eq!(reply.failure.as_deref(), Some("connection reset"));
    }

    #[tokio::test]
    async fn empty_reply_maps_to_speechless_fallback() {
        let adapter = AssistantAdapter::new(ScriptedGenerator::ok("   "), 1_000);
        let reply = adapter.send(&[ChatMessage::user("hi")]).await;
        assert_eq!(reply.message.content, CHAT_EMPTY_FALLBACK);
        assert!(reply.is_fallback());
    }

    #[tokio::test]
    async fn hung_backend_times_out_into_fallback() {
        let adapter = AssistantAdapter::new(ScriptedGenerator::hung(), 20);
        let reply = adapter.send(&[ChatMessage::user("hi")]).await;
        assert_eq!(reply.message.content, CHAT_ERROR_FALLBACK);
        assert!(reply.failure.unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn mood_requests_use_their_own_prompt_and_fallbacks() {
        let generator = ScriptedGenerator::failing("boom");
        let adapter = AssistantAdapter::new(generator.clone(), 1_000);
        let reply = adapter.recommend_for_mood(" heartbroken ").await;
        assert_eq!(reply.message.content, MOOD_ERROR_FALLBACK);

        let seen = generator.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!((seen[0].temperature - MOOD_TEMPERATURE).abs() < f32::EPSILON);
        assert!(seen[0].messages[0]
            .content
            .contains("someone feeling heartbroken."));
    }

    #[tokio::test]
    async fn every_call_sends_the_full_transcript() {
        let generator = ScriptedGenerator::ok("ok");
        let adapter = AssistantAdapter::new(generator.clone(), 1_000);
        let transcript = vec![
            ChatMessage::assistant("Welcome."),
            ChatMessage::user("one"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("two"),
        ];
        adapter.send(&transcript).await;
        assert_eq!(generator.seen.borrow()[0].messages, transcript);
    }
}
