//! Feature naming
//!
//! A feature name is either a plain string or a composite of signed parts,
//! the shape hashing vectorizers produce once collisions are resolved back
//! to their source terms. Which variant applies is decided when the name is
//! constructed, not guessed at format time.

use serde::{Deserialize, Serialize};

/// One signed component of a composite feature name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedName {
    /// Component name
    pub name: String,
    /// +1 or -1
    pub sign: i8,
}

impl SignedName {
    /// Create a new signed name component
    pub fn new(name: impl Into<String>, sign: i8) -> Self {
        Self {
            name: name.into(),
            sign,
        }
    }

    /// Format this component with `inner` applied to the name.
    ///
    /// Non-positive signs get a `(-)` prefix.
    pub fn format_with<F>(&self, inner: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let prefix = if self.sign > 0 { "" } else { "(-)" };
        format!("{}{}", prefix, inner(&self.name))
    }
}

/// Format a signed name component, leaving the inner name untouched.
pub fn format_signed(part: &SignedName) -> String {
    part.format_with(|name| name.to_string())
}

/// A feature name as it appears in an explanation.
///
/// In JSON a plain name is a bare string and a composite is an array of
/// `{name, sign}` objects; anything else is rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureName {
    Plain(String),
    Composite(Vec<SignedName>),
}

impl FeatureName {
    /// Render the name for display.
    ///
    /// Plain names with a leading or trailing space are wrapped in double
    /// quotes so the whitespace stays visible. Composite parts are joined
    /// with `" | "`, each with the same quoting rule and a `(-)` prefix on
    /// negative parts.
    pub fn formatted(&self) -> String {
        match self {
            FeatureName::Plain(name) => quote_spaces(name),
            FeatureName::Composite(parts) => parts
                .iter()
                .map(|part| part.format_with(quote_spaces))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

impl From<&str> for FeatureName {
    fn from(name: &str) -> Self {
        FeatureName::Plain(name.to_string())
    }
}

impl From<String> for FeatureName {
    fn from(name: String) -> Self {
        FeatureName::Plain(name)
    }
}

impl From<Vec<SignedName>> for FeatureName {
    fn from(parts: Vec<SignedName>) -> Self {
        FeatureName::Composite(parts)
    }
}

fn quote_spaces(name: &str) -> String {
    if name.starts_with(' ') || name.ends_with(' ') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(FeatureName::from("ab").formatted(), "ab");
        assert_eq!(FeatureName::from("a b").formatted(), "a b");
    }

    #[test]
    fn test_plain_name_quotes_edge_spaces() {
        assert_eq!(FeatureName::from(" ab").formatted(), "\" ab\"");
        assert_eq!(FeatureName::from("ab ").formatted(), "\"ab \"");
        assert_eq!(FeatureName::from(" ab ").formatted(), "\" ab \"");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(&SignedName::new("foo", 1)), "foo");
        assert_eq!(format_signed(&SignedName::new("foo", -1)), "(-)foo");
    }

    #[test]
    fn test_format_signed_with_inner() {
        let part = SignedName::new(" foo", -1);
        assert_eq!(part.format_with(|n| format!("\"{n}\"")), "(-)\" foo\"");
    }

    #[test]
    fn test_composite_join() {
        let name = FeatureName::Composite(vec![
            SignedName::new("a", 1),
            SignedName::new("b", -1),
        ]);
        assert_eq!(name.formatted(), "a | (-)b");
    }

    #[test]
    fn test_composite_quotes_part_spaces() {
        let name = FeatureName::Composite(vec![
            SignedName::new(" a", 1),
            SignedName::new("b ", -1),
        ]);
        assert_eq!(name.formatted(), "\" a\" | (-)\"b \"");
    }

    #[test]
    fn test_json_plain_is_string() {
        let name: FeatureName = serde_json::from_str("\"tokens\"").unwrap();
        assert_eq!(name, FeatureName::from("tokens"));
    }

    #[test]
    fn test_json_composite_is_array() {
        let name: FeatureName =
            serde_json::from_str(r#"[{"name": "a", "sign": 1}, {"name": "b", "sign": -1}]"#)
                .unwrap();
        assert_eq!(
            name,
            FeatureName::Composite(vec![SignedName::new("a", 1), SignedName::new("b", -1)])
        );
    }

    #[test]
    fn test_json_rejects_parts_without_sign() {
        let result: std::result::Result<FeatureName, _> =
            serde_json::from_str(r#"[{"name": "a"}]"#);
        assert!(result.is_err());
    }
}
