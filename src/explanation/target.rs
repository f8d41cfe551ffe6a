//! Explanation records

use serde::{Deserialize, Serialize};
use std::fmt;

use super::weights::{FeatureImportance, FeatureWeights};
use crate::error::Result;

/// A class or regression target label.
///
/// Untagged so JSON payloads carry labels as bare scalars. Text labels
/// display single-quoted, numeric and boolean labels display plainly; the
/// convention is uniform across a rendered block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{value}"),
            Label::Float(value) => write!(f, "{value}"),
            Label::Bool(value) => write!(f, "{value}"),
            Label::Text(value) => write!(f, "'{value}'"),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        Label::Float(value)
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        Label::Bool(value)
    }
}

/// Explanation of one predicted class or regression target.
///
/// Exactly one of `class` and `target` is expected; rendering fails when
/// both are absent. When both are present, `class` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetExplanation {
    /// Class label, for classification explanations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Label>,
    /// Target label, for regression explanations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Label>,
    /// Predicted probability, if the model exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proba: Option<f64>,
    /// Decision score, if the model exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Feature weights for this target
    pub feature_weights: FeatureWeights,
}

impl TargetExplanation {
    /// Explanation for a classification label
    pub fn for_class(label: impl Into<Label>, feature_weights: FeatureWeights) -> Self {
        Self {
            class: Some(label.into()),
            target: None,
            proba: None,
            score: None,
            feature_weights,
        }
    }

    /// Explanation for a regression target
    pub fn for_target(label: impl Into<Label>, feature_weights: FeatureWeights) -> Self {
        Self {
            class: None,
            target: Some(label.into()),
            proba: None,
            score: None,
            feature_weights,
        }
    }

    /// Set the predicted probability
    pub fn with_proba(mut self, proba: f64) -> Self {
        self.proba = Some(proba);
        self
    }

    /// Set the decision score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A full model explanation.
///
/// Every section is optional; the renderer emits only what is present, in
/// the order the fields are declared here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Explanation {
    /// Name of the interpretation method that produced this explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Free-form description, emitted verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-class weight blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<TargetExplanation>>,
    /// Per-target weight blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetExplanation>>,
    /// Global feature importances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importances: Option<Vec<FeatureImportance>>,
}

impl Explanation {
    /// Create an empty explanation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpretation method name
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the per-class weight blocks
    pub fn with_classes(mut self, classes: Vec<TargetExplanation>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Set the per-target weight blocks
    pub fn with_targets(mut self, targets: Vec<TargetExplanation>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Set the global feature importances
    pub fn with_feature_importances(mut self, importances: Vec<FeatureImportance>) -> Self {
        self.feature_importances = Some(importances);
        self
    }

    /// Parse an explanation from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this explanation to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
