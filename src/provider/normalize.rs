//! Pure reshaping of raw provider payloads into chart-ready records.
//!
//! Each transform is total over any syntactically valid payload of its
//! expected shape and is a bijection on entries: nothing is filtered,
//! reordered or deduplicated, and empty inputs yield empty outputs.

use crate::models::{FeaturePoint, RankedFeature, RetentionPoint, SegmentCard};

use super::client::{RawFeatureImportance, RawRetentionRates, RawTopFeatures, RawUserSegments};

pub fn feature_importance(raw: RawFeatureImportance) -> Vec<FeaturePoint> {
    raw.into_iter()
        .map(|(name, value)| FeaturePoint { name, value })
        .collect()
}

pub fn user_segments(raw: RawUserSegments) -> Vec<SegmentCard> {
    raw.into_iter()
        .map(|(segment, attributes)| SegmentCard {
            segment,
            // Downstream numeric formatting assumes a number is always
            // present, so a null attribute becomes zero rather than a hole
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name, value.unwrap_or(0.0)))
                .collect(),
        })
        .collect()
}

pub fn retention_rates(raw: RawRetentionRates) -> Vec<RetentionPoint> {
    raw.into_iter()
        .map(|(cohort, rate)| RetentionPoint { cohort, rate })
        .collect()
}

/// Rank is positional in the provider's list: first entry is rank 1. The
/// suggestion text passes through verbatim.
pub fn top_features(raw: RawTopFeatures) -> (Vec<RankedFeature>, String) {
    let ranked = raw
        .top_features
        .into_iter()
        .enumerate()
        .map(|(index, (name, importance))| RankedFeature {
            rank: index + 1,
            name,
            importance,
        })
        .collect();

    (ranked, raw.suggestion)
}
