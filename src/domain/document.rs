//! Members document model
//!
//! A [`Document`] is a JSON object with a `members` object whose values are
//! [`Member`] objects carrying at least `id` and `name`. The shape is checked
//! once when the document is loaded; everything else in the JSON is kept
//! as-is, including key order.

use super::errors::AnonError;
use super::result::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key of the members mapping in the document root
pub const MEMBERS_KEY: &str = "members";

/// Member field holding the numeric identifier
pub const ID_FIELD: &str = "id";

/// Member field holding the display name
pub const NAME_FIELD: &str = "name";

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single entry of the `members` mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Member {
    fields: Map<String, Value>,
}

impl Member {
    /// Validates a member value found under `key`
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::Shape`] if the value is not an object or lacks
    /// `id` or `name`.
    pub fn from_value(key: &str, value: Value) -> Result<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(AnonError::Shape(format!(
                    "member '{key}' must be an object, found {}",
                    json_type(&other)
                )))
            }
        };

        for field in [ID_FIELD, NAME_FIELD] {
            if !fields.contains_key(field) {
                return Err(AnonError::Shape(format!(
                    "member '{key}' is missing required field '{field}'"
                )));
            }
        }

        Ok(Self { fields })
    }

    /// Current `id` value
    pub fn id(&self) -> &Value {
        &self.fields[ID_FIELD]
    }

    /// Current `name` value
    pub fn name(&self) -> &Value {
        &self.fields[NAME_FIELD]
    }

    /// Any field of the member
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Overwrites `id`, keeping the field's position
    pub fn set_id(&mut self, id: u32) {
        self.fields.insert(ID_FIELD.to_string(), Value::from(id));
    }

    /// Overwrites `name`, keeping the field's position
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields
            .insert(NAME_FIELD.to_string(), Value::String(name.into()));
    }

    /// Converts the member back into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// A loaded members document
///
/// The `members` entries are held apart from the rest of the root object so
/// they can be drained and re-keyed without touching any other field. On
/// conversion back to JSON they return to the position `members` originally
/// had.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
    members: Vec<(String, Member)>,
}

impl Document {
    /// Parses and validates a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::Parse`] for invalid JSON and [`AnonError::Shape`]
    /// if the JSON is not a members document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| AnonError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Validates a document from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(AnonError::Shape(format!(
                    "document root must be an object, found {}",
                    json_type(&other)
                )))
            }
        };

        let slot = root.get_mut(MEMBERS_KEY).ok_or_else(|| {
            AnonError::Shape(format!("document has no '{MEMBERS_KEY}' key"))
        })?;

        // Leave a placeholder so the key keeps its position in the root.
        let entries = match std::mem::take(slot) {
            Value::Object(entries) => entries,
            other => {
                return Err(AnonError::Shape(format!(
                    "'{MEMBERS_KEY}' must be an object, found {}",
                    json_type(&other)
                )))
            }
        };

        let members = entries
            .into_iter()
            .map(|(key, value)| {
                let member = Member::from_value(&key, value)?;
                Ok((key, member))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { root, members })
    }

    /// Number of members in the document
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members in document order
    pub fn members(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(key, member)| (key.as_str(), member))
    }

    /// Removes all members, returning them in document order
    pub fn take_members(&mut self) -> Vec<(String, Member)> {
        std::mem::take(&mut self.members)
    }

    /// Installs a new set of members
    ///
    /// Keys must be distinct; a later duplicate would shadow an earlier entry
    /// once serialized.
    pub fn set_members(&mut self, members: Vec<(String, Member)>) {
        self.members = members;
    }

    /// Serializes the document with two-space indentation
    pub fn into_pretty_json(self) -> Result<String> {
        serde_json::to_string_pretty(&self.into_value())
            .map_err(|e| AnonError::Serialization(e.to_string()))
    }

    /// Converts the document back into a JSON value
    pub fn into_value(self) -> Value {
        let mut root = self.root;
        let members = self
            .members
            .into_iter()
            .map(|(key, member)| (key, member.into_value()))
            .collect::<Map<_, _>>();
        root.insert(MEMBERS_KEY.to_string(), Value::Object(members));
        Value::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "team": "core",
            "members": {
                "a": {"id": 1, "name": "X", "role": "admin"},
                "b": {"id": 2, "name": "Y", "role": "member"}
            },
            "version": 3
        })
    }

    #[test]
    fn test_from_value_reads_members_in_order() {
        let doc = Document::from_value(sample()).unwrap();
        assert_eq!(doc.member_count(), 2);

        let keys: Vec<&str> = doc.members().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let (_, a) = doc.members().next().unwrap();
        assert_eq!(a.id(), &json!(1));
        assert_eq!(a.name(), &json!("X"));
        assert_eq!(a.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_round_trip_keeps_document_untouched() {
        let doc = Document::from_value(sample()).unwrap();
        assert_eq!(doc.into_value(), sample());
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let doc = Document::from_value(sample()).unwrap();
        let text = doc.into_pretty_json().unwrap();

        let team = text.find("\"team\"").unwrap();
        let members = text.find("\"members\"").unwrap();
        let version = text.find("\"version\"").unwrap();
        assert!(team < members && members < version);
        assert!(text.contains("\n  \"members\": {"));
    }

    #[test]
    fn test_set_fields_keep_position() {
        let mut member =
            Member::from_value("a", json!({"name": "X", "role": "admin", "id": 1})).unwrap();
        member.set_id(42);
        member.set_name("Ada");

        let text = serde_json::to_string(&member).unwrap();
        assert_eq!(text, r#"{"name":"Ada","role":"admin","id":42}"#);
    }

    #[test]
    fn test_empty_members_is_valid() {
        let doc = Document::from_json_str(r#"{"members": {}}"#).unwrap();
        assert_eq!(doc.member_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Document::from_json_str("{\"members\": ").unwrap_err();
        assert!(matches!(err, AnonError::Parse(_)));
    }

    #[test]
    fn test_non_object_root_is_shape_error() {
        let err = Document::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AnonError::Shape(ref m) if m.contains("array")));
    }

    #[test]
    fn test_missing_members_is_shape_error() {
        let err = Document::from_value(json!({"people": {}})).unwrap_err();
        assert!(matches!(err, AnonError::Shape(ref m) if m.contains("'members'")));
    }

    #[test]
    fn test_members_list_is_shape_error() {
        let err = Document::from_value(json!({"members": []})).unwrap_err();
        assert!(matches!(err, AnonError::Shape(ref m) if m.contains("found array")));
    }

    #[test]
    fn test_member_without_name_is_shape_error() {
        let err = Document::from_value(json!({"members": {"a": {"id": 1}}})).unwrap_err();
        match err {
            AnonError::Shape(message) => {
                assert!(message.contains("'a'"));
                assert!(message.contains("'name'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scalar_member_is_shape_error() {
        let err = Document::from_value(json!({"members": {"a": 5}})).unwrap_err();
        assert!(matches!(err, AnonError::Shape(ref m) if m.contains("found number")));
    }
}
