pub mod extractor;
pub mod model_names;
pub mod types;

use serde::{Deserialize, Serialize};

pub use extractor::PartExtractor;
pub use model_names::{ModelNameMap, normalize_model_name};
pub use types::*;

/// Whether `components.schemas` keys are rewritten to API Gateway model names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelNormalization {
    #[default]
    On,
    Off,
}

/// Where the `info` object lands in the API part's properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoPlacement {
    /// `{"info": {...}}`
    #[default]
    Nested,
    /// The `info` fields spread directly into the properties.
    Flattened,
}

/// Options controlling how documentation parts are extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub model_normalization: ModelNormalization,
    pub info_placement: InfoPlacement,
}

impl ExtractOptions {
    /// Model renaming with a nested `info` object.
    pub fn normalizing() -> Self {
        Self {
            model_normalization: ModelNormalization::On,
            info_placement: InfoPlacement::Nested,
        }
    }

    /// No model handling, `info` fields spread into the API part.
    pub fn flattened() -> Self {
        Self {
            model_normalization: ModelNormalization::Off,
            info_placement: InfoPlacement::Flattened,
        }
    }
}
