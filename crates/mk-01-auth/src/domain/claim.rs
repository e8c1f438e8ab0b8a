//! # Authentication Claim
//!
//! The key/value payload the Telegram login widget hands to the browser,
//! including the `hash` signature over all other fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the field carrying the provider's signature.
pub const HASH_FIELD: &str = "hash";

/// Identity assertions presented by a client, plus their signature.
///
/// Entries are kept in a `BTreeMap`, so iteration is already the
/// lexicographic key order the canonical check-string requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthClaim {
    fields: BTreeMap<String, Value>,
}

impl AuthClaim {
    /// Create an empty claim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a claim from a decoded JSON body.
    ///
    /// Anything other than a JSON object yields an empty claim, which never
    /// verifies.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            _ => Self::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The claimed signature, if present and a string.
    pub fn hash(&self) -> Option<&str> {
        self.fields.get(HASH_FIELD).and_then(Value::as_str)
    }

    /// Canonical check-string: every field except `hash`, sorted by key,
    /// rendered as `key=value` and joined with `\n`.
    ///
    /// Returns `None` when a value is neither a string nor a number; such a
    /// claim has no canonical form and cannot verify.
    pub fn check_string(&self) -> Option<String> {
        let lines = self
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != HASH_FIELD)
            .map(|(key, value)| render_value(value).map(|value| format!("{key}={value}")))
            .collect::<Option<Vec<_>>>()?;

        Some(lines.join("\n"))
    }

    /// Telegram account id, accepting both numbers and numeric strings.
    pub fn telegram_id(&self) -> Option<i64> {
        self.integer("id")
    }

    /// Unix timestamp of the login, if the provider sent one.
    pub fn auth_date(&self) -> Option<i64> {
        self.integer("auth_date")
    }

    /// String field, or an empty string when absent or not textual.
    pub fn text(&self, key: &str) -> String {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    fn integer(&self, key: &str) -> Option<i64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for AuthClaim {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Strings render raw, numbers as their JSON text.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_string_sorted_and_excludes_hash() {
        let claim = AuthClaim::new()
            .with("username", "ivan")
            .with("id", 123)
            .with("hash", "deadbeef")
            .with("auth_date", 1_700_000_000);

        assert_eq!(
            claim.check_string().unwrap(),
            "auth_date=1700000000\nid=123\nusername=ivan"
        );
    }

    #[test]
    fn test_check_string_empty_claim() {
        assert_eq!(AuthClaim::new().check_string().unwrap(), "");
        let only_hash = AuthClaim::new().with("hash", "abc");
        assert_eq!(only_hash.check_string().unwrap(), "");
    }

    #[test]
    fn test_check_string_rejects_non_scalar_values() {
        let claim = AuthClaim::new().with("id", 1).with("flag", true);
        assert!(claim.check_string().is_none());

        let claim = AuthClaim::new().with("id", 1).with("nested", json!({"a": 1}));
        assert!(claim.check_string().is_none());
    }

    #[test]
    fn test_from_json_object_and_non_object() {
        let claim = AuthClaim::from_json(&json!({"id": 5, "first_name": "A"}));
        assert_eq!(claim.len(), 2);
        assert_eq!(claim.telegram_id(), Some(5));

        assert!(AuthClaim::from_json(&json!([1, 2, 3])).is_empty());
        assert!(AuthClaim::from_json(&Value::Null).is_empty());
    }

    #[test]
    fn test_from_json_ignores_input_order() {
        let a: Value = serde_json::from_str(r#"{"id": 1, "first_name": "A", "hash": "x"}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"hash": "x", "first_name": "A", "id": 1}"#).unwrap();
        assert_eq!(
            AuthClaim::from_json(&a).check_string(),
            AuthClaim::from_json(&b).check_string()
        );
    }

    #[test]
    fn test_hash_must_be_string() {
        assert_eq!(AuthClaim::new().with("hash", "ab").hash(), Some("ab"));
        assert_eq!(AuthClaim::new().with("hash", 12).hash(), None);
    }

    #[test]
    fn test_telegram_id_accepts_numeric_string() {
        assert_eq!(AuthClaim::new().with("id", "987").telegram_id(), Some(987));
        assert_eq!(AuthClaim::new().with("id", "abc").telegram_id(), None);
        assert_eq!(AuthClaim::new().with("id", 1.5).telegram_id(), None);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let claim = AuthClaim::new().with("username", "ivan").with("id", 3);
        assert_eq!(claim.text("username"), "ivan");
        assert_eq!(claim.text("last_name"), "");
        assert_eq!(claim.text("id"), "");
    }

    #[test]
    fn test_serde_transparent() {
        let claim: AuthClaim = serde_json::from_value(json!({"id": 1, "hash": "h"})).unwrap();
        assert_eq!(claim.hash(), Some("h"));
        assert_eq!(serde_json::to_value(&claim).unwrap(), json!({"hash": "h", "id": 1}));
    }
}
