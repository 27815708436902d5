//! Test doubles for the service seams.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use trendcast_core::PublishRequest;
use trendcast_error::{
    GeminiError, GeminiErrorKind, TrendcastResult, TrendsError, TrendsErrorKind,
};
use trendcast_interface::{ImageResolver, Publisher, TextModel, TrendsSource};
use trendcast_models::ContentGenerator;
use trendcast_rate_limit::RetryPolicy;
use trendcast_server::Orchestrator;
use trendcast_trends::TrendsLookup;

/// Replays scripted answers in order and records prompts.
#[derive(Debug, Default)]
pub struct MockTextModel {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockTextModel {
    pub fn scripted(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate_text(&self, prompt: &str) -> TrendcastResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "quota exceeded".to_string(),
            ))
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

/// Answers every lookup with the same queries, or always rate limits.
#[derive(Debug, Default)]
pub struct MockTrendsSource {
    queries: Option<Vec<String>>,
    keywords_seen: Mutex<Vec<String>>,
}

impl MockTrendsSource {
    pub fn answering(queries: &[&str]) -> Self {
        Self {
            queries: Some(queries.iter().map(|q| q.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn rate_limited() -> Self {
        Self::default()
    }

    pub fn keywords_seen(&self) -> Vec<String> {
        self.keywords_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrendsSource for MockTrendsSource {
    async fn related_top_queries(&self, keyword: &str) -> Result<Vec<String>, TrendsError> {
        self.keywords_seen.lock().unwrap().push(keyword.to_string());
        self.queries
            .clone()
            .ok_or_else(|| TrendsError::new(TrendsErrorKind::RateLimited))
    }
}

/// Numbers the images it hands out and records each query.
#[derive(Debug, Default)]
pub struct MockImageResolver {
    queries: Mutex<Vec<String>>,
}

impl MockImageResolver {
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageResolver for MockImageResolver {
    async fn resolve_image(&self, query: &str) -> String {
        let mut queries = self.queries.lock().unwrap();
        queries.push(query.to_string());
        format!("https://img/{}.jpg", queries.len())
    }
}

/// Returns a fixed body and records requests.
#[derive(Debug)]
pub struct MockPublisher {
    response: serde_json::Value,
    requests: Mutex<Vec<PublishRequest>>,
}

impl MockPublisher {
    pub fn returning(response: serde_json::Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, request: &PublishRequest) -> TrendcastResult<serde_json::Value> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Handles to every mock behind an orchestrator.
pub struct Harness {
    pub model: Arc<MockTextModel>,
    pub trends: Arc<MockTrendsSource>,
    pub images: Arc<MockImageResolver>,
    pub publisher: Arc<MockPublisher>,
}

impl Harness {
    pub fn new(model: MockTextModel, trends: MockTrendsSource) -> Self {
        Self {
            model: Arc::new(model),
            trends: Arc::new(trends),
            images: Arc::new(MockImageResolver::default()),
            publisher: Arc::new(MockPublisher::returning(serde_json::json!({
                "status": "success",
                "id": "post-123"
            }))),
        }
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(
            ContentGenerator::new(self.model.clone()),
            TrendsLookup::new(self.trends.clone(), RetryPolicy::default()),
            self.images.clone(),
            self.publisher.clone(),
        )
    }
}

/// Model answers for a full "Hyderabad" generate run.
pub const HYDERABAD_SCRIPT: &[&str] = &[
    "Hyderabad city",
    "Hyderabad history, charminar, hyderabadi biryani",
    "Post one---Post two---Post three",
];
