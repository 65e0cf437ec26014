pub mod components;
pub mod document;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;

use crate::error::ParseError;
use document::{OpenApiDocument, version_text};

/// Parse an OpenAPI document from YAML.
///
/// The YAML is read into a JSON value first so that unquoted status codes
/// (`200:`) become string keys before the typed model sees them.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let value: serde_json::Value = serde_yaml_ng::from_str(input)?;
    let doc: OpenApiDocument = serde_json::from_value(value).map_err(ParseError::Model)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Serialize a document back to YAML.
pub fn to_yaml(doc: &OpenApiDocument) -> Result<String, ParseError> {
    Ok(serde_yaml_ng::to_string(doc)?)
}

/// Serialize a document back to pretty-printed JSON.
pub fn to_json(doc: &OpenApiDocument) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Only the 3.x layout is understood. A document without an `openapi`
/// field is accepted unless it declares itself as Swagger 2.0.
fn validate_version(doc: &OpenApiDocument) -> Result<(), ParseError> {
    match doc.openapi_version() {
        Some(version) if !version.starts_with("3.") => {
            Err(ParseError::UnsupportedVersion(version))
        }
        Some(_) => Ok(()),
        None => match doc.extensions.get("swagger") {
            Some(swagger) => Err(ParseError::UnsupportedVersion(format!(
                "swagger {}",
                version_text(swagger)
            ))),
            None => Ok(()),
        },
    }
}
