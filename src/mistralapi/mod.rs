use std::time::Duration;
use serde_derive::{Deserialize, Serialize};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::helpers::AnnotateError;

pub const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

const TEMPERATURE: f64 = 0.0;
const MAX_TOKENS: u32 = 2500;
const RANDOM_SEED: u32 = 42;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
	pub role: String,
	pub content: String,
}

impl Message {
	pub fn system(content: String) -> Self {
		Message{ role: "system".to_string(), content: content }
	}
	pub fn user(content: String) -> Self {
		Message{ role: "user".to_string(), content: content }
	}
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
	model: String,
	messages: Vec<Message>,
	temperature: f64,
	max_tokens: u32,
	random_seed: u32,
}

impl ChatRequest {
	pub fn new(model: &str, messages: Vec<Message>) -> Self {
		ChatRequest {
			model: model.to_string(),
			messages: messages,
			temperature: TEMPERATURE,
			max_tokens: MAX_TOKENS,
			random_seed: RANDOM_SEED,
		}
	}
}

/// Assemble the two-message conversation sent to the API. The source text is
/// appended to the user prompt separated by a single newline, untrimmed.
pub fn build_conversation(system_prompt: &str, user_prompt: &str, source_text: &str) -> Vec<Message> {
	vec![
		Message::system(system_prompt.to_string()),
		Message::user(format!("{}\n{}", user_prompt, source_text)),
	]
}

pub struct MistralContext {
	api_key: String,
	model_name: String,
	post_url: Url,
	client: reqwest::Client,
}

impl MistralContext {
	pub fn new(post_url: &str, api_key: String) -> Result<Self, AnnotateError> {
		let client = reqwest::Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()?;
		Ok(MistralContext {
			api_key: api_key,
			model_name: DEFAULT_MODEL.to_string(),
			post_url: Url::parse(post_url)?,
			client: client,
		})
	}

	pub fn set_model_name(&mut self, model_name: &str) {
		self.model_name = model_name.to_string();
	}

	pub fn model_name(&self) -> &str {
		&self.model_name
	}

	/// Perform one chat-completion request and return the first completion's
	/// content. Any transport failure, non-2xx status or malformed body is an
	/// error; no retry is attempted.
	pub async fn call_api(&self, messages: Vec<Message>) -> Result<String, AnnotateError> {
		let request = ChatRequest::new(&self.model_name, messages);
		let serialised = serde_json::to_string(&request)?;
		let url = self.post_url.clone();
		let resp = self.client
			.post(url)
			.header("Authorization", format!("Bearer {}", &self.api_key))
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?;
		let status = resp.status();
		let body = resp.text().await?;
		if !status.is_success() {
			return Err(AnnotateError::Api(format!("status {}: {}", status, body)));
		}
		Self::parse_response(&body)
	}

	pub fn parse_response(body: &str) -> Result<String, AnnotateError> {
		let json: serde_json::Value = serde_json::from_str(body)?;
		let message = json
			.get("choices").ok_or(AnnotateError::BadResponse("no choices in the return object".to_string()))?
			.get(0).ok_or(AnnotateError::BadResponse("no element 0 in the choices object".to_string()))?
			.get("message").ok_or(AnnotateError::BadResponse("no message in the choices element 0".to_string()))?;
		let content = message
			.get("content").and_then(|content| content.as_str())
			.ok_or(AnnotateError::BadResponse("no content in the message".to_string()))?;
		Ok(content.to_string())
	}
}
