use std::time::Duration;

use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::auth::ApiKey;
use crate::error::{ConvLensError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw provider payloads. JSON object entries arrive in provider order and
/// that order is meaningful downstream, hence `IndexMap`.
pub type RawFeatureImportance = IndexMap<String, f64>;
pub type RawUserSegments = IndexMap<String, IndexMap<String, Option<f64>>>;
pub type RawRetentionRates = IndexMap<String, f64>;

#[derive(Debug, Deserialize)]
pub struct RawTopFeatures {
    pub top_features: Vec<(String, f64)>,
    pub suggestion: String,
}

/// The four result sets of one refresh cycle, fetched all-or-nothing.
#[derive(Debug)]
pub struct RawResults {
    pub feature_importance: RawFeatureImportance,
    pub user_segments: RawUserSegments,
    pub retention_rates: RawRetentionRates,
    pub top_features: RawTopFeatures,
}

pub struct AnalyticsClient {
    client: Client,
    api_url: Url,
}

impl AnalyticsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("ConvLens/0.1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConvLensError::Config(format!("Failed to create HTTP client: {e}")))?;

        // Endpoint paths join relative to the base, so it must end in '/'
        let api_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| ConvLensError::Config(format!("Invalid base URL: {e}")))?;

        Ok(Self { client, api_url })
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .map_err(|e| ConvLensError::Config(format!("Invalid endpoint URL: {e}")))
    }

    /// Ask the provider to recompute its result sets for this key. The
    /// acknowledgment body carries no analytics data and is not interpreted
    /// beyond success or failure.
    pub async fn trigger_refresh(&self, api_key: &ApiKey) -> Result<()> {
        let operation = "trigger_refresh";
        let url = self.endpoint_url("fetch_data")?;

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "api_key": api_key.as_str() }))
            .send()
            .await
            .map_err(|source| ConvLensError::Network { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvLensError::Protocol { operation, status });
        }

        Ok(())
    }

    async fn get_json<T>(&self, operation: &'static str, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ConvLensError::Network { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvLensError::Protocol { operation, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ConvLensError::Parse { operation, source })
    }

    pub async fn fetch_feature_importance(&self) -> Result<RawFeatureImportance> {
        self.get_json("feature_importance", "feature_importance")
            .await
    }

    pub async fn fetch_user_segments(&self) -> Result<RawUserSegments> {
        self.get_json("user_segments", "user_segments").await
    }

    pub async fn fetch_retention_rates(&self) -> Result<RawRetentionRates> {
        self.get_json("retention_rates", "retention_rates").await
    }

    pub async fn fetch_top_features(&self) -> Result<RawTopFeatures> {
        self.get_json("top_features", "top_features").await
    }

    /// Retrieve all four result sets concurrently. They carry no ordering
    /// dependency between each other, but any single failure fails the whole
    /// bundle so partial results are never surfaced.
    pub async fn fetch_all(&self) -> Result<RawResults> {
        let (feature_importance, user_segments, retention_rates, top_features) = futures::try_join!(
            self.fetch_feature_importance(),
            self.fetch_user_segments(),
            self.fetch_retention_rates(),
            self.fetch_top_features(),
        )?;

        Ok(RawResults {
            feature_importance,
            user_segments,
            retention_rates,
            top_features,
        })
    }
}
