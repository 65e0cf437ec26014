use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::parameter::Parameter;
use super::request_body::RequestBody;
use super::response::Response;

/// HTTP method keys recognised inside a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Map a path-item key to a method. Keys are matched exactly, as
    /// OpenAPI requires lowercase method names.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Option<Response>>>,

    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// One entry of a path item.
#[derive(Debug, Clone, PartialEq)]
pub enum PathEntry {
    /// An HTTP method key. `None` when the document has `get: null`.
    Operation(Option<Operation>),
    /// Any non-method key (`summary`, `parameters`, `servers`, `$ref`, `x-*`).
    Other(Value),
}

/// A path item. Entries keep their declaration order, which drives the
/// order of the METHOD, PARAMETER, REQUEST_BODY and RESPONSE parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    pub entries: IndexMap<String, PathEntry>,
}

impl PathItem {
    /// Operations in declaration order, keyed by the raw method key.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Option<&Operation>)> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            PathEntry::Operation(op) => Some((key.as_str(), op.as_ref())),
            PathEntry::Other(_) => None,
        })
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match self.entries.get(method.as_str()) {
            Some(PathEntry::Operation(op)) => op.as_ref(),
            _ => None,
        }
    }
}

impl Serialize for PathItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            match entry {
                PathEntry::Operation(op) => map.serialize_entry(key, op)?,
                PathEntry::Other(value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut entries = IndexMap::with_capacity(raw.len());
        for (key, value) in raw {
            let entry = if HttpMethod::from_key(&key).is_some() {
                let op = serde_json::from_value::<Option<Operation>>(value)
                    .map_err(|e| D::Error::custom(format!("operation `{key}`: {e}")))?;
                PathEntry::Operation(op)
            } else {
                PathEntry::Other(value)
            };
            entries.insert(key, entry);
        }
        Ok(PathItem { entries })
    }
}
