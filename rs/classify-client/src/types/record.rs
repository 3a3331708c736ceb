use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// One log entry as an ordered field-name to value mapping. Field order is
/// insertion order, so decoded records keep the header-row order. A column
/// that was missing from a short row is simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new() -> Self {
        LogRecord::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields
            .insert(name.to_owned(), Value::String(value.to_owned()));
    }

    /// Returns the field value if it is present and a string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// The string form of every field value, in field order.
    pub fn field_texts(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.fields.values().map(|value| match value {
            Value::String(text) => Cow::Borrowed(text.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut record = LogRecord::new();
        for (name, value) in pairs {
            record.insert(name, value);
        }
        record
    }
}
