//! Explanation text rendering
//!
//! Renders structured model explanations into aligned plain text suitable
//! for console or log output:
//! - Per-class and per-target feature weights with sign-annotated columns
//! - Truncation markers for omitted features
//! - Global feature importances with spread annotations
//! - Composite ("unhashed") feature naming
//!
//! # Modules
//!
//! - [`explanation`] - Explanation data model (labels, feature names, weights)
//! - [`formatters`] - Rendering of explanations to text
//! - [`error`] - Error types

// Core error handling
pub mod error;

// Data model
pub mod explanation;

// Output rendering
pub mod formatters;

pub use error::{ExplainError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{ExplainError, Result};

    // Data model
    pub use crate::explanation::{
        Explanation, FeatureImportance, FeatureName, FeatureWeight, FeatureWeights, Label,
        SignedName, TargetExplanation,
    };

    // Rendering
    pub use crate::formatters::format_as_text;
}
