use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One bar of the feature-importance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePoint {
    pub name: String,
    pub value: f64,
}

/// One user-segment card. The attribute set is provider-defined and open;
/// unknown attribute names are carried through unchanged, in response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCard {
    pub segment: String,
    #[serde(flatten)]
    pub attributes: IndexMap<String, f64>,
}

/// One bar of the retention chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPoint {
    pub cohort: String,
    pub rate: f64,
}

/// One entry of the ranked conversion-driver list. Rank is positional in the
/// provider's response (first entry is rank 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    pub rank: usize,
    pub name: String,
    pub importance: f64,
}

/// The chart-ready output of one successful refresh cycle. All collections
/// are replaced together; a failed cycle leaves the previous value intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub feature_importance: Vec<FeaturePoint>,
    pub user_segments: Vec<SegmentCard>,
    pub retention_rates: Vec<RetentionPoint>,
    pub top_features: Vec<RankedFeature>,
    pub suggestion: String,
    pub collected_at: Option<DateTime<Utc>>,
}
