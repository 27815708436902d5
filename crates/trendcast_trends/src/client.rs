//! Google Trends related-queries client.
//!
//! One lookup is two requests: an explore query that hands out widget
//! tokens, then a fetch of the related-queries widget. Both responses carry
//! the `)]}'` anti-hijacking prefix ahead of the JSON.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};
use trendcast_error::{TrendsError, TrendsErrorKind};
use trendcast_interface::TrendsSource;

use crate::TrendsConfig;

const EXPLORE_PATH: &str = "/trends/api/explore";
const RELATED_SEARCHES_PATH: &str = "/trends/api/widgetdata/relatedsearches";
const RELATED_QUERIES_WIDGET: &str = "RELATED_QUERIES";

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    #[serde(default)]
    request: serde_json::Value,
    #[serde(default)]
    token: String,
}

#[derive(Debug, Deserialize)]
struct RelatedSearchesResponse {
    default: RankedLists,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankedLists {
    #[serde(default)]
    ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankedList {
    #[serde(default)]
    ranked_keyword: Vec<RankedKeyword>,
}

#[derive(Debug, Deserialize)]
struct RankedKeyword {
    query: String,
}

/// Remove the `)]}'` guard (and the comma some endpoints add) from a body.
pub fn strip_xssi_prefix(body: &str) -> &str {
    body.trim_start()
        .trim_start_matches(")]}'")
        .trim_start_matches(',')
        .trim_start()
}

/// HTTP client for the unofficial Google Trends API.
///
/// The session cookie is fetched from the service root before the first
/// lookup and kept in the client's cookie store.
#[derive(Debug)]
pub struct GoogleTrendsClient {
    http: reqwest::Client,
    config: TrendsConfig,
    session: OnceCell<()>,
}

impl GoogleTrendsClient {
    /// Build a client for the given settings.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: TrendsConfig) -> Result<Self, TrendsError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TrendsError::new(TrendsErrorKind::Transport(e.to_string())))?;

        debug!("Created trends client");
        Ok(Self {
            http,
            config,
            session: OnceCell::new(),
        })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &TrendsConfig {
        &self.config
    }

    async fn ensure_session(&self) -> Result<(), TrendsError> {
        self.session
            .get_or_try_init(|| async {
                let url = format!("{}/", self.config.base_url());
                let response = self
                    .http
                    .get(&url)
                    .query(&[("geo", "US")])
                    .send()
                    .await
                    .map_err(|e| TrendsError::new(TrendsErrorKind::Transport(e.to_string())))?;
                debug!(status = %response.status(), "Trends session established");
                Ok::<(), TrendsError>(())
            })
            .await
            .map(|_| ())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TrendsError> {
        let url = format!("{}{}", self.config.base_url(), path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| TrendsError::new(TrendsErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TrendsError::new(TrendsErrorKind::RateLimited));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TrendsError::new(TrendsErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            return Err(TrendsError::new(TrendsErrorKind::Http {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        serde_json::from_str(strip_xssi_prefix(&body))
            .map_err(|e| TrendsError::new(TrendsErrorKind::MalformedResponse(e.to_string())))
    }

    fn locale_params(&self) -> [(&'static str, String); 2] {
        [
            ("hl", self.config.hl().clone()),
            ("tz", self.config.tz().to_string()),
        ]
    }

    async fn explore(&self, keyword: &str) -> Result<ExploreResponse, TrendsError> {
        let req = serde_json::json!({
            "comparisonItem": [{
                "keyword": keyword,
                "time": self.config.timeframe(),
                "geo": self.config.geo(),
            }],
            "category": self.config.category(),
            "property": "",
        });

        let [hl, tz] = self.locale_params();
        self.get_json(EXPLORE_PATH, &[hl, tz, ("req", req.to_string())])
            .await
    }

    async fn related_searches(&self, widget: &Widget) -> Result<Vec<String>, TrendsError> {
        let [hl, tz] = self.locale_params();
        let response: RelatedSearchesResponse = self
            .get_json(
                RELATED_SEARCHES_PATH,
                &[
                    hl,
                    tz,
                    ("req", widget.request.to_string()),
                    ("token", widget.token.clone()),
                ],
            )
            .await?;

        // The first ranked list is "top", the second "rising".
        Ok(response
            .default
            .ranked_list
            .into_iter()
            .next()
            .map(|top| top.ranked_keyword.into_iter().map(|k| k.query).collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl TrendsSource for GoogleTrendsClient {
    #[instrument(skip(self))]
    async fn related_top_queries(&self, keyword: &str) -> Result<Vec<String>, TrendsError> {
        self.ensure_session().await?;

        let explore = self.explore(keyword).await?;
        let Some(widget) = explore
            .widgets
            .iter()
            .find(|w| w.id.starts_with(RELATED_QUERIES_WIDGET))
        else {
            warn!("Explore response had no related queries widget");
            return Ok(Vec::new());
        };

        let queries = self.related_searches(widget).await?;
        debug!(count = queries.len(), "Fetched related top queries");
        Ok(queries)
    }
}
