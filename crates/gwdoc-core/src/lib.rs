pub mod config;
pub mod decorate;
pub mod error;
pub mod parse;
pub mod parts;

pub use decorate::{DecorationStrategy, Decorator, DocumentationExtension, EXTENSION_KEY};
pub use parts::{
    DocumentationPart, ExtractOptions, InfoPlacement, Location, LocationType, ModelNameMap,
    ModelNormalization, PartExtractor, PartProperties,
};
