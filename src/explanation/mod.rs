//! Explanation data model
//!
//! Caller-constructed, immutable explanation records:
//! - Feature names, plain or composite with signed parts
//! - Truncated positive/negative feature weights per target
//! - Global feature importances
//! - Top-level explanation records with optional sections

mod feature;
mod target;
mod weights;

pub use feature::{format_signed, FeatureName, SignedName};
pub use target::{Explanation, Label, TargetExplanation};
pub use weights::{FeatureImportance, FeatureWeight, FeatureWeights};
