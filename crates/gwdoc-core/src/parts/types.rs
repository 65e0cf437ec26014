use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parse::document::Info;
use crate::parse::parameter::ParameterLocation;

/// The kind of structural element a documentation part describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Api,
    Resource,
    Method,
    PathParameter,
    QueryParameter,
    RequestHeader,
    RequestBody,
    Response,
    Model,
}

impl LocationType {
    /// Location type for a parameter. Cookie and unknown locations have none.
    pub fn for_parameter(location: Option<ParameterLocation>) -> Option<Self> {
        match location? {
            ParameterLocation::Path => Some(LocationType::PathParameter),
            ParameterLocation::Query => Some(LocationType::QueryParameter),
            ParameterLocation::Header => Some(LocationType::RequestHeader),
            ParameterLocation::Cookie => None,
        }
    }
}

/// Where in the document a part applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

impl Location {
    pub fn api() -> Self {
        Self {
            location_type: Some(LocationType::Api),
            ..Self::default()
        }
    }

    pub fn resource(path: &str) -> Self {
        Self {
            location_type: Some(LocationType::Resource),
            path: Some(path.to_string()),
            ..Self::default()
        }
    }

    pub fn method(location_type: Option<LocationType>, path: &str, method: &str) -> Self {
        Self {
            location_type,
            path: Some(path.to_string()),
            method: Some(method.to_string()),
            ..Self::default()
        }
    }

    pub fn model(name: &str) -> Self {
        Self {
            location_type: Some(LocationType::Model),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Properties of the API part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiProperties {
    Nested { info: Info },
    Flattened(Info),
}

/// Properties of a RESOURCE part. Always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceProperties {}

/// Properties of a METHOD part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MethodProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
}

/// Properties of parameter, request body and response parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptionProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

/// Properties of a MODEL part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProperties {
    pub schema: Value,
}

/// The property payload of a part; its shape is fixed by the location type.
/// Serializes as the bare property object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartProperties {
    Api(ApiProperties),
    Resource(ResourceProperties),
    Method(MethodProperties),
    Described(DescriptionProperties),
    Model(ModelProperties),
}

impl PartProperties {
    pub fn description(&self) -> Option<&Value> {
        match self {
            PartProperties::Method(p) => p.description.as_ref(),
            PartProperties::Described(p) => p.description.as_ref(),
            PartProperties::Api(ApiProperties::Flattened(info)) => info.0.get("description"),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PartProperties::Api(ApiProperties::Nested { .. }) => false,
            PartProperties::Api(ApiProperties::Flattened(info)) => info.0.is_empty(),
            PartProperties::Resource(_) => true,
            PartProperties::Method(p) => p.description.is_none() && p.summary.is_none(),
            PartProperties::Described(p) => p.description.is_none(),
            PartProperties::Model(_) => false,
        }
    }
}

/// A documentation part: a location in the document plus its extracted properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentationPart {
    pub location: Location,
    pub properties: PartProperties,
}

impl DocumentationPart {
    pub fn location_type(&self) -> Option<LocationType> {
        self.location.location_type
    }
}

/// The emission test for optional descriptive fields: `null`, `false`, `0`
/// and `""` are dropped; any other value is kept.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Clone `value` if it passes [`is_truthy`].
pub(crate) fn truthy(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| is_truthy(v)).cloned()
}
