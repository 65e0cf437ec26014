use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::decorate::DecorationStrategy;
use crate::error::ConfigError;
use crate::parts::ExtractOptions;

/// Top-level project configuration loaded from `.gwdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GwdocConfig {
    pub input: String,
    /// Where the decorated document is written. Absent means stdout.
    pub output: Option<String>,
    pub strategy: DecorationStrategy,
    pub extract: ExtractOptions,
}

impl Default for GwdocConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: None,
            strategy: DecorationStrategy::DocumentationPart,
            extract: ExtractOptions::default(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".gwdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<GwdocConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: GwdocConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# gwdoc configuration
input: openapi.yaml
# output: openapi.decorated.json   # omit to write to stdout
strategy: documentationPart

extract:
  model_normalization: on     # on | off  (rename schemas to alphanumeric model names)
  info_placement: nested      # nested | flattened
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{InfoPlacement, ModelNormalization};

    #[test]
    fn test_default_config() {
        let config = GwdocConfig::default();
        assert_eq!(config.input, "openapi.yaml");
        assert!(config.output.is_none());
        assert_eq!(config.strategy, DecorationStrategy::DocumentationPart);
        assert_eq!(config.extract.model_normalization, ModelNormalization::On);
        assert_eq!(config.extract.info_placement, InfoPlacement::Nested);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api.json
output: out.json
strategy: documentationPart
extract:
  model_normalization: off
  info_placement: flattened
"#;
        let config: GwdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.json");
        assert_eq!(config.output.as_deref(), Some("out.json"));
        assert_eq!(config.extract, ExtractOptions::flattened());
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "extract:\n  info_placement: flattened\n";
        let config: GwdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        // Defaults applied
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.extract.model_normalization, ModelNormalization::On);
        assert_eq!(config.extract.info_placement, InfoPlacement::Flattened);
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: GwdocConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.extract, ExtractOptions::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "input: petstore.yaml\nextract:\n  model_normalization: off\n").unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.input, "petstore.yaml");
        assert_eq!(config.extract.model_normalization, ModelNormalization::Off);
    }

    #[test]
    fn test_load_config_reports_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "extract:\n  info_placement: sideways\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
