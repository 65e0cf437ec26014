use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document does not match the OpenAPI model: {0}")]
    Model(#[source] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

/// Faults raised while walking a document for documentation parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("document has no `info` object")]
    MissingInfo,

    #[error("operation `{method} {path}` has no `responses`")]
    MissingResponses { path: String, method: String },
}

#[derive(Debug, Error)]
pub enum DecorateError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to encode documentation parts: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("unknown decoration strategy: {0}")]
    UnknownStrategy(String),
}
