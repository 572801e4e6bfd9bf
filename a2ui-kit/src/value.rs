//! Bindable Values
//!
//! A component property on the wire is either a plain JSON value, carried
//! through unchanged, or a tagged binding object:
//!
//! ```json
//! {"literalString": "Hello World"}
//! {"path": "/user/name"}
//! {"literalString": "fallback", "path": "/user/name"}
//! ```
//!
//! When a binding carries both a literal and a path, the literal wins; a
//! message producer may send a literal fallback next to a binding and older
//! clients keep working.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_model::DataModel;

/// A property value that is either an inline literal or a data-model binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindableValue {
    /// A tagged binding object
    Binding(Binding),
    /// A plain JSON value used as-is
    Literal(Value),
}

/// The tagged form of a [`BindableValue`].
///
/// Resolution precedence: `literalString`, `literalNumber`, `literalBoolean`,
/// `literalArray`, then `path`. Absence of every tag resolves to `None`,
/// which renderers treat as "no content".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Binding {
    /// Inline string literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_string: Option<String>,

    /// Inline number literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_number: Option<f64>,

    /// Inline boolean literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_boolean: Option<bool>,

    /// Inline array literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_array: Option<Vec<Value>>,

    /// Slash-delimited data-model path, `./`-prefixed when relative to an
    /// enclosing template item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Binding {
    fn resolve(&self, model: &DataModel, context: &str) -> Option<Value> {
        if let Some(s) = &self.literal_string {
            return Some(Value::String(s.clone()));
        }
        if let Some(n) = self.literal_number {
            return serde_json::Number::from_f64(n).map(Value::Number);
        }
        if let Some(b) = self.literal_boolean {
            return Some(Value::Bool(b));
        }
        if let Some(items) = &self.literal_array {
            return Some(Value::Array(items.clone()));
        }
        let path = self.path.as_deref()?;
        model.get(&compose_path(path, context)).cloned()
    }
}

impl BindableValue {
    /// Create a literal string value
    pub fn literal_string(s: impl Into<String>) -> Self {
        BindableValue::Binding(Binding {
            literal_string: Some(s.into()),
            ..Binding::default()
        })
    }

    /// Create a literal number value
    pub fn literal_number(n: f64) -> Self {
        BindableValue::Binding(Binding {
            literal_number: Some(n),
            ..Binding::default()
        })
    }

    /// Create a literal boolean value
    pub fn literal_boolean(b: bool) -> Self {
        BindableValue::Binding(Binding {
            literal_boolean: Some(b),
            ..Binding::default()
        })
    }

    /// Create a path binding
    pub fn path(p: impl Into<String>) -> Self {
        BindableValue::Binding(Binding {
            path: Some(p.into()),
            ..Binding::default()
        })
    }

    /// Check if this is a path binding without a literal fallback
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            BindableValue::Binding(Binding {
                literal_string: None,
                literal_number: None,
                literal_boolean: None,
                literal_array: None,
                path: Some(_),
            })
        )
    }

    /// Resolve against a data model, composing `./` paths with `context`.
    pub fn resolve(&self, model: &DataModel, context: &str) -> Option<Value> {
        match self {
            BindableValue::Literal(v) => Some(v.clone()),
            BindableValue::Binding(binding) => binding.resolve(model, context),
        }
    }

    /// Resolve to a string
    pub fn resolve_string(&self, model: &DataModel, context: &str) -> Option<String> {
        self.resolve(model, context)
            .and_then(|v| v.as_str().map(str::to_owned))
    }

    /// Resolve to a number
    pub fn resolve_number(&self, model: &DataModel, context: &str) -> Option<f64> {
        self.resolve(model, context).and_then(|v| v.as_f64())
    }

    /// Resolve to a boolean
    pub fn resolve_bool(&self, model: &DataModel, context: &str) -> Option<bool> {
        self.resolve(model, context).and_then(|v| v.as_bool())
    }

    /// Resolve to an array
    pub fn resolve_array(&self, model: &DataModel, context: &str) -> Option<Vec<Value>> {
        self.resolve(model, context).and_then(|v| match v {
            Value::Array(items) => Some(items),
            _ => None,
        })
    }
}

impl Default for BindableValue {
    fn default() -> Self {
        BindableValue::Binding(Binding::default())
    }
}

/// Compose a binding path with the context path in effect.
///
/// A `./`-prefixed path is relative to the enclosing template item: the `.`
/// is dropped and the remainder appended after `context`. Every other path
/// is absolute from the data-model root, context or not.
pub fn compose_path(path: &str, context: &str) -> String {
    match path.strip_prefix("./") {
        Some(rest) if !context.is_empty() => {
            format!("{}/{}", context.trim_end_matches('/'), rest)
        }
        Some(rest) => format!("/{}", rest),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> DataModel {
        let mut model = DataModel::new();
        model.set("/user/name", json!("Bob"));
        model.set("/count", json!(7));
        model.set("/items", json!([{"name": "x"}, {"name": "y"}]));
        model
    }

    #[test]
    fn test_parse_literal_string() {
        let value: BindableValue = serde_json::from_str(r#"{"literalString": "Hello"}"#).unwrap();
        assert_eq!(
            value.resolve_string(&model(), ""),
            Some("Hello".to_string())
        );
    }

    #[test]
    fn test_parse_path() {
        let value: BindableValue = serde_json::from_str(r#"{"path": "/user/name"}"#).unwrap();
        assert!(value.is_path());
        assert_eq!(value.resolve_string(&model(), ""), Some("Bob".to_string()));
    }

    #[test]
    fn test_plain_scalar_passes_through() {
        let value: BindableValue = serde_json::from_str(r#""just text""#).unwrap();
        assert_eq!(
            value.resolve(&model(), ""),
            Some(Value::String("just text".into()))
        );

        let value: BindableValue = serde_json::from_str("41").unwrap();
        assert_eq!(value.resolve_number(&model(), ""), Some(41.0));
    }

    #[test]
    fn test_untagged_object_passes_through() {
        // Not a binding shape, so it is carried as a plain value.
        let value: BindableValue = serde_json::from_str(r#"{"weird": 1}"#).unwrap();
        assert_eq!(value.resolve(&model(), ""), Some(json!({"weird": 1})));
    }

    #[test]
    fn test_literal_wins_over_path() {
        let value: BindableValue =
            serde_json::from_str(r#"{"literalString": "A", "path": "/user/name"}"#).unwrap();
        assert_eq!(value.resolve_string(&model(), ""), Some("A".to_string()));
    }

    #[test]
    fn test_empty_binding_is_undefined() {
        let value: BindableValue = serde_json::from_str("{}").unwrap();
        assert_eq!(value.resolve(&model(), ""), None);
    }

    #[test]
    fn test_unresolvable_path_is_undefined() {
        let value = BindableValue::path("/nope");
        assert_eq!(value.resolve(&model(), ""), None);
    }

    #[test]
    fn test_relative_path_uses_context() {
        let value = BindableValue::path("./name");
        assert_eq!(
            value.resolve_string(&model(), "/items/1"),
            Some("y".to_string())
        );
        // Identical to the absolute spelling.
        let absolute = BindableValue::path("/items/1/name");
        assert_eq!(
            value.resolve_string(&model(), "/items/1"),
            absolute.resolve_string(&model(), "/items/1")
        );
    }

    #[test]
    fn test_absolute_path_ignores_context() {
        let value = BindableValue::path("/user/name");
        assert_eq!(
            value.resolve_string(&model(), "/items/0"),
            Some("Bob".to_string())
        );
    }

    #[test]
    fn test_compose_path() {
        assert_eq!(compose_path("./name", "/items/2"), "/items/2/name");
        assert_eq!(compose_path("./name", ""), "/name");
        assert_eq!(compose_path("/abs", "/items/2"), "/abs");
    }
}
