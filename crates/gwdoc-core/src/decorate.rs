use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, DecorateError, ExtractError};
use crate::parse::document::OpenApiDocument;
use crate::parts::{DocumentationPart, ExtractOptions, ModelNameMap, PartExtractor};

/// Top-level vendor extension read by API Gateway on import.
pub const EXTENSION_KEY: &str = "x-amazon-apigateway-documentation";

/// What a [`Decorator`] attaches to the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationStrategy {
    #[default]
    #[serde(rename = "documentationPart")]
    DocumentationPart,
}

impl DecorationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecorationStrategy::DocumentationPart => "documentationPart",
        }
    }
}

impl fmt::Display for DecorationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecorationStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documentationPart" => Ok(DecorationStrategy::DocumentationPart),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Payload stored under [`EXTENSION_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentationExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,

    #[serde(rename = "documentationParts")]
    pub documentation_parts: Vec<DocumentationPart>,
}

/// Runs an extraction over a document and attaches the result as a vendor
/// extension, leaving every other top-level field in place.
pub struct Decorator<'a> {
    document: &'a mut OpenApiDocument,
    options: ExtractOptions,
    model_names: ModelNameMap,
}

impl<'a> Decorator<'a> {
    pub fn new(document: &'a mut OpenApiDocument, options: ExtractOptions) -> Self {
        Self {
            document,
            options,
            model_names: ModelNameMap::default(),
        }
    }

    /// Apply `strategy` to the document.
    ///
    /// Running it again replaces the extension written by the previous run.
    /// Model names normalized by an earlier run map onto themselves.
    pub fn decorate(&mut self, strategy: DecorationStrategy) -> Result<(), DecorateError> {
        match strategy {
            DecorationStrategy::DocumentationPart => self.decorate_documentation_parts(),
        }
    }

    /// Schema renames performed by the last [`decorate`](Self::decorate).
    pub fn model_names(&self) -> &ModelNameMap {
        &self.model_names
    }

    pub fn document(&self) -> &OpenApiDocument {
        &*self.document
    }

    fn decorate_documentation_parts(&mut self) -> Result<(), DecorateError> {
        let version = self
            .document
            .info
            .as_ref()
            .ok_or(ExtractError::MissingInfo)?
            .version()
            .cloned();
        if version.is_none() {
            log::warn!("`info.version` is missing; documentation version left unset");
        }

        let mut extractor = PartExtractor::new(&mut *self.document, self.options);
        let documentation_parts = extractor.parse()?;
        self.model_names = extractor.into_model_names();

        let extension = DocumentationExtension {
            version,
            documentation_parts,
        };
        let value = serde_json::to_value(&extension)?;
        self.document
            .extensions
            .insert(EXTENSION_KEY.to_string(), value);
        Ok(())
    }
}
