//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use trendcast_interface::TextModel;
//! use trendcast_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("api-key", "gemini-2.5-flash")?;
//! let answer = client.generate_text("Say hello").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::{debug, instrument};

use gemini_rust::{Gemini, client::Model};

use trendcast_error::{GeminiError, GeminiErrorKind, TrendcastResult};
use trendcast_interface::TextModel;

use super::GeminiResult;

/// Model used when configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Google Gemini API bound to a single model.
pub struct GeminiClient {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names become `Model::Custom` with the "models/" prefix
    /// the API expects.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    /// Create a client for `model_name` authenticated with `api_key`.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn new(api_key: impl AsRef<str>, model_name: impl AsRef<str>) -> TrendcastResult<Self> {
        Self::new_internal(api_key.as_ref(), model_name.as_ref()).map_err(Into::into)
    }

    fn new_internal(api_key: &str, model_name: &str) -> GeminiResult<Self> {
        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!("Gemini client created");
        Ok(Self {
            client,
            model_name: model_name.to_string(),
        })
    }

    async fn generate_internal(&self, prompt: &str) -> GeminiResult<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        let text = answer_text(response.candidates.len(), response.text())?;
        debug!(response_len = text.len(), "Gemini answered");
        Ok(text)
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }
}

/// The answer text, which may be blank. Only an answer without any
/// candidate is an error.
fn answer_text(candidate_count: usize, text: String) -> GeminiResult<String> {
    if candidate_count == 0 {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }
    Ok(text)
}

/// Pull the number following "code " out of an error message.
fn extract_status_code(error_msg: &str) -> Option<u16> {
    let code_start = error_msg.find("code ")?;
    let digits: String = error_msg[code_start + 5..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[async_trait]
impl TextModel for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model_name, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> TrendcastResult<String> {
        self.generate_internal(prompt).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
