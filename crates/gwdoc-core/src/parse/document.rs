use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::components::Components;
use super::operation::PathItem;

/// The `info` object, kept as an ordered bag of fields since its content is
/// copied verbatim into the API documentation part.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Info(pub IndexMap<String, Value>);

impl Info {
    pub fn version(&self) -> Option<&Value> {
        self.0.get("version")
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

/// Top-level OpenAPI 3.x document.
///
/// Only the fields the extractor walks are typed; everything else
/// (`servers`, `tags`, `security`, vendor extensions...) is carried in
/// `extensions` so the document round-trips intact. On output the typed
/// fields come first and the `extensions` entries follow in their original
/// relative order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Kept raw: an unquoted `openapi: 3.1` in YAML arrives as a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl OpenApiDocument {
    /// The declared `openapi` version as text, whether written as a string
    /// or as a bare number.
    pub fn openapi_version(&self) -> Option<String> {
        self.openapi.as_ref().map(version_text)
    }

    /// Mutable access to `components.schemas`, if the document declares any.
    pub fn schemas_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        self.components.as_mut()?.schemas.as_mut()
    }
}

/// Render a version field that may be a string or a number.
pub(crate) fn version_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
