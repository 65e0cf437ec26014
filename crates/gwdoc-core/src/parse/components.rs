use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Components object. Schemas are opaque: they are renamed and copied into
/// MODEL parts but never inspected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Value>>,

    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}
