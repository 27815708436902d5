//! Shared test doubles for model tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use trendcast_error::{GeminiError, GeminiErrorKind, TrendcastResult};
use trendcast_interface::TextModel;

/// Text model that replays scripted answers and records every prompt.
#[derive(Debug, Default)]
pub struct MockTextModel {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockTextModel {
    /// Answers `responses` in order, one per call.
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Fails every call with a server error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate_text(&self, prompt: &str) -> TrendcastResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 500,
                message: "internal error".to_string(),
            })
            .into());
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
