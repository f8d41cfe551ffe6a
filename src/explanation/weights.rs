//! Feature weights and importances

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::feature::FeatureName;

/// A single feature's contribution to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    /// Feature name
    pub feature: FeatureName,
    /// Signed contribution
    pub weight: f64,
}

impl FeatureWeight {
    /// Create a new feature weight
    pub fn new(feature: impl Into<FeatureName>, weight: f64) -> Self {
        Self {
            feature: feature.into(),
            weight,
        }
    }
}

/// Positive and negative feature weights of one explanation target,
/// truncated to the strongest entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Positive contributions, strongest first
    pub pos: Vec<FeatureWeight>,
    /// Negative contributions, most negative last
    pub neg: Vec<FeatureWeight>,
    /// Count of positive features omitted by truncation
    #[serde(default)]
    pub pos_remaining: usize,
    /// Count of negative features omitted by truncation
    #[serde(default)]
    pub neg_remaining: usize,
}

impl FeatureWeights {
    /// Create feature weights with no omitted entries
    pub fn new(pos: Vec<FeatureWeight>, neg: Vec<FeatureWeight>) -> Self {
        Self {
            pos,
            neg,
            pos_remaining: 0,
            neg_remaining: 0,
        }
    }

    /// Set the counts of features omitted by truncation
    pub fn with_remaining(mut self, pos_remaining: usize, neg_remaining: usize) -> Self {
        self.pos_remaining = pos_remaining;
        self.neg_remaining = neg_remaining;
        self
    }

    /// Build truncated weights from raw per-feature contributions.
    ///
    /// Splits the contributions by sign, keeps the `top` strongest of each
    /// side and records how many were dropped. Zero-weight features are
    /// discarded. Positive entries come out strongest first and negative
    /// entries end with the most negative, so a rendered block reads as one
    /// column of decreasing weights.
    pub fn from_contributions(weights: Vec<FeatureWeight>, top: usize) -> Self {
        let (mut pos, mut neg): (Vec<_>, Vec<_>) = weights
            .into_iter()
            .filter(|w| w.weight != 0.0)
            .partition(|w| w.weight > 0.0);

        pos.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        neg.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

        let pos_remaining = pos.len().saturating_sub(top);
        let neg_remaining = neg.len().saturating_sub(top);
        pos.truncate(top);
        neg.truncate(top);
        neg.reverse();

        Self {
            pos,
            neg,
            pos_remaining,
            neg_remaining,
        }
    }

    /// True when neither side has entries
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }
}

/// Global importance of one feature: mean importance plus spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    /// Feature name
    pub feature: FeatureName,
    /// Mean importance
    pub weight: f64,
    /// Standard deviation of the importance estimate
    pub std: f64,
}

impl FeatureImportance {
    /// Create a new feature importance entry
    pub fn new(feature: impl Into<FeatureName>, weight: f64, std: f64) -> Self {
        Self {
            feature: feature.into(),
            weight,
            std,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[(&str, f64)]) -> Vec<FeatureWeight> {
        entries
            .iter()
            .map(|(name, w)| FeatureWeight::new(*name, *w))
            .collect()
    }

    #[test]
    fn test_from_contributions_splits_by_sign() {
        let fw = FeatureWeights::from_contributions(
            weights(&[("a", 1.0), ("b", -2.0), ("c", 3.0), ("d", -0.5)]),
            10,
        );
        assert_eq!(fw.pos.len(), 2);
        assert_eq!(fw.neg.len(), 2);
        assert_eq!(fw.pos_remaining, 0);
        assert_eq!(fw.neg_remaining, 0);
    }

    #[test]
    fn test_from_contributions_orders_column() {
        let fw = FeatureWeights::from_contributions(
            weights(&[("a", 1.0), ("b", -2.0), ("c", 3.0), ("d", -0.5)]),
            10,
        );
        // Positive strongest first, negative most-negative last.
        assert_eq!(fw.pos[0].weight, 3.0);
        assert_eq!(fw.pos[1].weight, 1.0);
        assert_eq!(fw.neg[0].weight, -0.5);
        assert_eq!(fw.neg[1].weight, -2.0);
    }

    #[test]
    fn test_from_contributions_truncates_and_counts() {
        let fw = FeatureWeights::from_contributions(
            weights(&[
                ("a", 5.0),
                ("b", 4.0),
                ("c", 3.0),
                ("d", -1.0),
                ("e", -2.0),
                ("f", -3.0),
            ]),
            2,
        );
        assert_eq!(fw.pos.len(), 2);
        assert_eq!(fw.pos[0].weight, 5.0);
        assert_eq!(fw.pos_remaining, 1);
        // The strongest negatives survive truncation.
        assert_eq!(fw.neg.len(), 2);
        assert_eq!(fw.neg[0].weight, -2.0);
        assert_eq!(fw.neg[1].weight, -3.0);
        assert_eq!(fw.neg_remaining, 1);
    }

    #[test]
    fn test_from_contributions_drops_zero_weights() {
        let fw = FeatureWeights::from_contributions(weights(&[("a", 0.0), ("b", 1.0)]), 10);
        assert_eq!(fw.pos.len(), 1);
        assert!(fw.neg.is_empty());
    }

    #[test]
    fn test_remaining_deserializes_to_zero_when_absent() {
        let fw: FeatureWeights = serde_json::from_str(
            r#"{"pos": [{"feature": "a", "weight": 1.0}], "neg": []}"#,
        )
        .unwrap();
        assert_eq!(fw.pos_remaining, 0);
        assert_eq!(fw.neg_remaining, 0);
    }
}
