//! Plain-text rendering of explanations
//!
//! Produces aligned, sign-annotated columns of feature weights. All widths
//! are computed per weight-block sequence, so class blocks of one
//! explanation share their alignment and the importance list aligns
//! independently.

use crate::error::{ExplainError, Result};
use crate::explanation::{Explanation, FeatureImportance, FeatureWeight, TargetExplanation};

const PLUS_MINUS: &str = "\u{b1}";
const ELLIPSIS: &str = "\u{2026}";

/// Render an explanation as plain text.
///
/// Emits, in order and only when present: the method line, the description,
/// per-class weight blocks, per-target weight blocks and the feature
/// importance list. Lines are joined with `\n`. Fails with
/// [`ExplainError::MissingLabel`] when a weight-block entry carries neither
/// a class nor a target; no partial output is produced.
pub fn format_as_text(explanation: &Explanation) -> Result<String> {
    let mut lines = Vec::new();

    if let Some(method) = &explanation.method {
        lines.push(format!("Explained as: {method}"));
    }

    if let Some(description) = &explanation.description {
        lines.push(description.clone());
    }

    if let Some(classes) = &explanation.classes {
        lines.extend(format_weight_blocks(classes)?);
    }

    if let Some(targets) = &explanation.targets {
        lines.extend(format_weight_blocks(targets)?);
    }

    if let Some(importances) = &explanation.feature_importances {
        lines.extend(format_importances(importances));
    }

    tracing::debug!(
        classes = explanation.classes.as_ref().map_or(0, Vec::len),
        targets = explanation.targets.as_ref().map_or(0, Vec::len),
        importances = explanation.feature_importances.as_ref().map_or(0, Vec::len),
        lines = lines.len(),
        "rendered explanation"
    );

    Ok(lines.join("\n"))
}

/// Render one sequence of weight blocks with a shared alignment width.
fn format_weight_blocks(records: &[TargetExplanation]) -> Result<Vec<String>> {
    let width = records
        .iter()
        .flat_map(|record| {
            let w = &record.feature_weights;
            w.pos.iter().chain(w.neg.iter())
        })
        .map(|fw| fw.feature.formatted().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let suffix = format_scores(record.proba, record.score);
        let header = if let Some(label) = &record.class {
            format!("y={label}{suffix} top features")
        } else if let Some(label) = &record.target {
            format!("{label}{suffix} top features")
        } else {
            return Err(ExplainError::MissingLabel { index });
        };
        lines.push(header);
        lines.push("-".repeat(width + 10));

        let w = &record.feature_weights;
        lines.extend(w.pos.iter().map(|fw| format_weight_line(fw, width)));
        if w.pos_remaining > 0 {
            lines.push(format_remaining(w.pos_remaining, "positive"));
        }
        if w.neg_remaining > 0 {
            lines.push(format_remaining(w.neg_remaining, "negative"));
        }
        lines.extend(w.neg.iter().map(|fw| format_weight_line(fw, width)));
        lines.push(String::new());
    }
    Ok(lines)
}

/// Parenthetical probability/score suffix for a block header.
fn format_scores(proba: Option<f64>, score: Option<f64>) -> String {
    let mut parts = Vec::new();
    if let Some(proba) = proba {
        parts.push(format!("probability={proba:.3}"));
    }
    if let Some(score) = score {
        parts.push(format!("score={score:.3}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_weight_line(fw: &FeatureWeight, width: usize) -> String {
    format!(
        "{weight:+8.3}  {name:<width$}",
        weight = fw.weight,
        name = fw.feature.formatted(),
    )
}

fn format_remaining(remaining: usize, kind: &str) -> String {
    format!("{ELLIPSIS:>8}  ({remaining} more {kind} features)")
}

fn format_importances(importances: &[FeatureImportance]) -> Vec<String> {
    let width = importances
        .iter()
        .map(|imp| imp.feature.formatted().chars().count())
        .max()
        .unwrap_or(0);

    importances
        .iter()
        .map(|imp| {
            format!(
                "{weight:.4} {PLUS_MINUS} {std:.4} {name:<width$}",
                weight = imp.weight,
                std = 2.0 * imp.std,
                name = imp.feature.formatted(),
            )
        })
        .collect()
}
