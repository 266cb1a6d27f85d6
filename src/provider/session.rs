use chrono::Utc;
use log::{info, warn};

use crate::auth::ApiKey;
use crate::error::Result;
use crate::models::DashboardData;

use super::client::AnalyticsClient;
use super::normalize;

/// One user session against the analytics provider: the held credential plus
/// the latest successfully normalized dashboard.
pub struct Session {
    client: AnalyticsClient,
    api_key: ApiKey,
    data: DashboardData,
}

impl Session {
    pub fn new(base_url: &str, api_key: ApiKey) -> Result<Self> {
        let client = AnalyticsClient::new(base_url)?;

        Ok(Self {
            client,
            api_key,
            data: DashboardData::default(),
        })
    }

    /// Replace the held credential wholesale. No validation happens here;
    /// the remote endpoint is the authority on whether a key is valid, and
    /// an empty key is forwarded as-is.
    pub fn set_api_key(&mut self, api_key: ApiKey) {
        self.api_key = api_key;
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The latest successfully normalized cycle. Empty until the first
    /// successful refresh; a failed refresh leaves it untouched.
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    /// Run one refresh cycle: trigger server-side aggregation, fetch the four
    /// result sets, normalize, and swap the dashboard in a single assignment.
    ///
    /// Taking `&mut self` serializes cycles: a new refresh cannot start while
    /// another is in flight.
    pub async fn refresh(&mut self) -> Result<()> {
        info!("Starting refresh cycle");

        // Phase 1: the provider recomputes its result sets as a side effect
        // of this call, so it must settle before anything is fetched
        if let Err(e) = self.client.trigger_refresh(&self.api_key).await {
            warn!("Refresh trigger failed, keeping previous results: {e}");
            return Err(e);
        }

        // Phase 2: all four fetches, all-or-nothing
        let raw = match self.client.fetch_all().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Result fetch failed, keeping previous results: {e}");
                return Err(e);
            }
        };

        let (top_features, suggestion) = normalize::top_features(raw.top_features);
        let data = DashboardData {
            feature_importance: normalize::feature_importance(raw.feature_importance),
            user_segments: normalize::user_segments(raw.user_segments),
            retention_rates: normalize::retention_rates(raw.retention_rates),
            top_features,
            suggestion,
            collected_at: Some(Utc::now()),
        };

        info!(
            "Refresh complete: {} features, {} segments, {} cohorts",
            data.feature_importance.len(),
            data.user_segments.len(),
            data.retention_rates.len()
        );

        // The four collections swap together, never field-by-field
        self.data = data;

        Ok(())
    }
}
