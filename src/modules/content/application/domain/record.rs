use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored collection entry: the store-assigned id plus the entity fields,
/// flattened into one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// An entity kept as an ordered list in its own document.
pub trait CollectionEntity:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const FILE_NAME: &'static str;
    /// Lowercase noun used in client-facing messages.
    const LABEL: &'static str;
    /// Used when the whole collection is the subject, e.g. a failed list.
    const PLURAL_LABEL: &'static str;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// An entity with exactly one instance and no id.
pub trait SingletonDocument:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const FILE_NAME: &'static str;
    const LABEL: &'static str;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeError {
    #[error("update payload must be a JSON object")]
    NotAnObject,

    #[error("merged document is invalid: {0}")]
    Invalid(String),
}

/// Overlays the supplied top-level fields onto `current`. Keys absent from
/// `patch` keep their value; an `id` key is ignored.
pub fn merge_fields<T>(current: &T, patch: Value) -> Result<T, MergeError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(patch) = patch else {
        return Err(MergeError::NotAnObject);
    };

    let mut merged: Map<String, Value> = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(MergeError::NotAnObject),
        Err(e) => return Err(MergeError::Invalid(e.to_string())),
    };

    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        merged.insert(key, value);
    }

    serde_json::from_value(Value::Object(merged)).map_err(|e| MergeError::Invalid(e.to_string()))
}

/// Parses a create/replace payload. A caller-supplied `id` is dropped.
pub fn parse_fields<T: DeserializeOwned>(payload: Value) -> Result<T, MergeError> {
    let Value::Object(mut map) = payload else {
        return Err(MergeError::NotAnObject);
    };
    map.remove("id");
    serde_json::from_value(Value::Object(map)).map_err(|e| MergeError::Invalid(e.to_string()))
}
