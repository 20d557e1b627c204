//! Remote model delegation for post body generation.
//!
//! This is the optional half of a two-stage pipeline: `remote_draft`
//! returns a result-or-failure, and the generator falls back to templates
//! unconditionally on failure. Remote failures are never surfaced to the
//! end user as blocking errors.
//!
//! The wire format is the common chat-completion shape: a JSON POST with a
//! model identifier, a system/user message list, a temperature, and a
//! max-token bound; the response's first choice carries the generated text.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generate::{Platform, PostDraft, Style};
use crate::sanitize::sanitize_text;
use crate::{DraftError, PageSummary, Result};

/// Remote chat-completion endpoint configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Full chat-completions endpoint URL.
    pub endpoint: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier sent in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output tokens.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 600,
            timeout: 30,
        }
    }
}

impl RemoteConfig {
    /// Create a config from the `POSTDRAFT_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::RemoteGeneration`] when the variable is unset.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("POSTDRAFT_API_KEY")
            .map_err(|_| DraftError::RemoteGeneration("POSTDRAFT_API_KEY not set".to_string()))?;
        Ok(Self { api_key, ..Default::default() })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Send one chat-completion request and return the generated text.
///
/// A single retry is attempted on failure; after that the error propagates
/// so the caller can fall back to the template pipeline.
///
/// # Errors
///
/// Returns [`DraftError::RemoteGeneration`] for non-success status or a
/// response without choices, [`DraftError::Timeout`] on timeout, and
/// [`DraftError::HttpError`] for transport failures.
pub async fn remote_generate(system_prompt: &str, user_prompt: &str, config: &RemoteConfig) -> Result<String> {
    match send_once(system_prompt, user_prompt, config).await {
        Ok(text) => Ok(text),
        Err(first) => {
            debug!(error = %first, "remote request failed, retrying once");
            send_once(system_prompt, user_prompt, config).await
        }
    }
}

async fn send_once(system_prompt: &str, user_prompt: &str, config: &RemoteConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(DraftError::HttpError)?;

    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            Message { role: "system", content: system_prompt.to_string() },
            Message { role: "user", content: user_prompt.to_string() },
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };

    let response = client
        .post(&config.endpoint)
        .bearer_auth(&config.api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                DraftError::Timeout { timeout: config.timeout }
            } else {
                DraftError::HttpError(e)
            }
        })?;

    if !response.status().is_success() {
        return Err(DraftError::RemoteGeneration(format!("status {}", response.status())));
    }

    let body: ChatResponse = response
        .json()
        .await
        .map_err(|e| DraftError::RemoteGeneration(format!("malformed response: {}", e)))?;

    body.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| DraftError::RemoteGeneration("response contained no choices".to_string()))
}

/// Produce a full draft through the remote model.
///
/// The response body is used verbatim (after sanitization) as the post; for
/// twitter it is split into thread segments on blank lines so the draft
/// shape matches the deterministic path.
pub(crate) async fn remote_draft(
    summary: &PageSummary, platform: Platform, style: Style, config: &RemoteConfig,
) -> Result<PostDraft> {
    let system = system_prompt(platform, style);
    let user = user_prompt(summary);

    let body = remote_generate(&system, &user, config).await?;
    let body = sanitize_text(&body);

    if body.is_empty() {
        return Err(DraftError::RemoteGeneration("response sanitized to empty text".to_string()));
    }

    Ok(match platform {
        Platform::Twitter => PostDraft::Thread(body.split("\n\n").map(str::to_string).collect()),
        _ => PostDraft::Single(body),
    })
}

/// Platform- and style-specific instruction text.
fn system_prompt(platform: Platform, style: Style) -> String {
    let platform_rules = match platform {
        Platform::Linkedin => "Write a LinkedIn post. Professional audience, up to 3000 characters, line breaks between ideas.",
        Platform::Twitter => "Write a Twitter thread. Each tweet at most 280 characters, tweets separated by blank lines.",
        Platform::Instagram => "Write an Instagram caption. Lead with a strong first line, end with a hashtag block.",
        Platform::Facebook => "Write a Facebook post. Conversational, a question at the end invites comments.",
        Platform::Generic => "Write a short social media post.",
    };

    let style_rules = match style {
        Style::Professional => "Tone: polished and professional, no slang.",
        Style::Modern => "Tone: punchy and contemporary, emoji welcome.",
        Style::Minimal => "Tone: spare. Few words, no filler, at most two hashtags.",
    };

    format!(
        "You turn webpage summaries into ready-to-post social media drafts. {} {} Respond with the post text only.",
        platform_rules, style_rules
    )
}

/// User prompt carrying the extracted page facts.
fn user_prompt(summary: &PageSummary) -> String {
    let mut prompt = format!("Title: {}\nURL: {}\n", summary.title, summary.url);

    if !summary.description.is_empty() {
        prompt.push_str(&format!("Description: {}\n", summary.description));
    }

    if !summary.key_points.is_empty() {
        prompt.push_str("Key points:\n");
        for point in &summary.key_points {
            prompt.push_str(&format!("- {}\n", point));
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn summary() -> PageSummary {
        PageSummary {
            url: "https://example.com/post".to_string(),
            title: "A Title".to_string(),
            description: "Short description".to_string(),
            main_image: None,
            images: vec![],
            key_points: vec!["First".to_string(), "Second".to_string()],
            brand_colors: vec![],
            logo: None,
            metadata: HashMap::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message { role: "system", content: "sys".to_string() },
                Message { role: "user", content: "usr".to_string() },
            ],
            temperature: 0.7,
            max_tokens: 600,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], 600);
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"the post"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "the post");
    }

    #[test]
    fn test_system_prompt_mentions_platform_and_style() {
        let prompt = system_prompt(Platform::Twitter, Style::Minimal);
        assert!(prompt.contains("280"));
        assert!(prompt.contains("spare"));
    }

    #[test]
    fn test_user_prompt_carries_key_points() {
        let prompt = user_prompt(&summary());
        assert!(prompt.contains("Title: A Title"));
        assert!(prompt.contains("- First"));
        assert!(prompt.contains("- Second"));
    }

    #[test]
    fn test_from_env_missing_key() {
        // scoped: the variable is highly unlikely to be set in CI
        if std::env::var("POSTDRAFT_API_KEY").is_err() {
            assert!(matches!(
                RemoteConfig::from_env(),
                Err(DraftError::RemoteGeneration(_))
            ));
        }
    }

    #[test]
    fn test_remote_failure_falls_back_to_templates() {
        use crate::generate::{Generator, GeneratorConfig};

        let config = RemoteConfig {
            // closed port: connection refused without touching the network
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key: "test".to_string(),
            timeout: 1,
            ..Default::default()
        };

        let page = summary();

        let remote = std::thread::spawn(move || {
            tokio::runtime::Runtime::new().unwrap().block_on(async {
                let generator = Generator::with_config(GeneratorConfig::builder().seed(5).build());
                generator
                    .generate_with_remote(&page, Platform::Facebook, Style::Professional, &config)
                    .await
            })
        })
        .join()
        .unwrap();

        let generator = Generator::with_config(GeneratorConfig::builder().seed(5).build());
        let deterministic = generator.generate(&summary(), Platform::Facebook, Style::Professional);

        assert_eq!(remote, deterministic);
        assert!(!remote.text().is_empty());
    }
}
