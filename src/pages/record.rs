use serde_json::{Map, Value};

/// Errors that can occur while building page records from descriptor input
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Expected JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Expected JSON array of page records")]
    NotAnArray,

    #[error("Item {0}: {1}")]
    InvalidItem(usize, String),
}

/// One page/route descriptor: an open set of fields with two conventions,
/// a string `path` and a numeric `order` used for menu sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRecord {
    fields: Map<String, Value>,
}

impl PageRecord {
    /// Build a record from API/descriptor input. Only the shape is checked
    /// here; which fields are required is the caller's concern.
    pub fn from_json(json: Value) -> Result<Self, RecordError> {
        match json {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Convert a JSON array to records, naming the offending index on error.
    pub fn from_json_array(json: Value) -> Result<Vec<Self>, RecordError> {
        match json {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    let record = Self::from_json(item)
                        .map_err(|e| RecordError::InvalidItem(index, e.to_string()))?;
                    records.push(record);
                }
                Ok(records)
            }
            _ => Err(RecordError::NotAnArray),
        }
    }

    /// Get field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Route path, when present and a string
    pub fn path(&self) -> Option<&str> {
        self.get("path").and_then(Value::as_str)
    }

    /// Numeric sort key. A missing or non-numeric `order` sorts as +infinity,
    /// so ascending puts such records last and descending puts them first.
    pub fn order_key(&self) -> f64 {
        self.get("order").and_then(Value::as_f64).unwrap_or(f64::INFINITY)
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn to_json_array(records: &[Self]) -> Value {
        Value::Array(records.iter().map(Self::to_json).collect())
    }
}

impl From<Map<String, Value>> for PageRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<PageRecord> for Value {
    fn from(record: PageRecord) -> Self {
        record.to_json()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
