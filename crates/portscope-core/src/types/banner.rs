use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single banner record: one observed service/device as returned by the
/// search API or stored in a downloaded results file.
///
/// Banners carry no fixed schema. Field names and types vary per record, so
/// the raw JSON document is kept as-is and individual fields are decoded
/// into a [`FieldValue`] on lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Banner(Map<String, Value>);

impl Banner {
    /// Create an empty banner
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns true if the record has no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields present in the raw record
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Raw JSON value of a field, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a raw field value, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Look up a field and decode it into one of the closed value kinds.
    ///
    /// Returns `None` both for fields that are missing and for fields whose
    /// value counts as empty (empty string, numeric zero, empty array,
    /// `null`, `false`, empty object). The two cases are indistinguishable
    /// to rendering code, which skips them.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        FieldValue::decode(self.0.get(name)?)
    }
}

impl From<Map<String, Value>> for Banner {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A banner field value decoded into one of the kinds the rendering layer
/// understands.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-form text
    Text(String),
    /// Integer or floating-point number
    Number(Number),
    /// Ordered sequence of text items
    List(Vec<String>),
}

impl FieldValue {
    /// Decode a raw JSON value, returning `None` for null and for values
    /// that count as empty.
    #[must_use]
    pub fn decode(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some(Self::Text("true".to_owned())),
            Value::Number(n) => {
                if is_zero(n) {
                    None
                } else {
                    Some(Self::Number(n.clone()))
                }
            }
            Value::String(s) => {
                if s.is_empty() {
                    None
                } else {
                    Some(Self::Text(s.clone()))
                }
            }
            Value::Array(items) => {
                if items.is_empty() {
                    None
                } else {
                    Some(Self::List(items.iter().map(element_text).collect()))
                }
            }
            Value::Object(fields) => {
                if fields.is_empty() {
                    None
                } else {
                    // Nested objects keep their compact JSON form so they
                    // still fit in a single column.
                    Some(Self::Text(value.to_string()))
                }
            }
        }
    }

    /// Borrow the text if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the number if this is a numeric value
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow the items if this is a list value
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Text form of one array element. Strings are taken as-is, anything else
/// falls back to its JSON encoding.
fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_zero(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        return i == 0;
    }
    if let Some(u) = n.as_u64() {
        return u == 0;
    }
    n.as_f64().is_some_and(|f| f == 0.0)
}
