use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response definition (inline or `$ref`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}
