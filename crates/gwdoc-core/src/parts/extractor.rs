use crate::error::ExtractError;
use crate::parse::document::OpenApiDocument;
use crate::parse::operation::PathItem;

use super::model_names::{ModelNameMap, rename_schemas};
use super::types::*;
use super::{ExtractOptions, InfoPlacement, ModelNormalization};

/// Walks an OpenAPI document and derives its documentation parts.
///
/// Parts come out as: the API part, then one MODEL part per schema (when
/// model normalization is on), then for each path in declaration order its
/// RESOURCE part followed by the METHOD, PARAMETER, REQUEST_BODY and RESPONSE
/// parts of its operations, grouped by kind.
pub struct PartExtractor<'a> {
    document: &'a mut OpenApiDocument,
    options: ExtractOptions,
    model_names: ModelNameMap,
}

impl<'a> PartExtractor<'a> {
    pub fn new(document: &'a mut OpenApiDocument, options: ExtractOptions) -> Self {
        Self {
            document,
            options,
            model_names: ModelNameMap::default(),
        }
    }

    /// Extract all documentation parts.
    ///
    /// With model normalization on, `components.schemas` is re-keyed in the
    /// document as a side effect; the renames are available from
    /// [`model_names`](Self::model_names) afterwards. The document is left
    /// untouched when extraction fails.
    pub fn parse(&mut self) -> Result<Vec<DocumentationPart>, ExtractError> {
        let api = self.api_part()?;

        let mut resource_parts = Vec::new();
        for (path, item) in &self.document.paths {
            log::debug!("collecting parts for `{path}`");
            resource_parts.extend(path_parts(path, item)?);
        }

        let mut parts = vec![api];
        if self.options.model_normalization == ModelNormalization::On {
            parts.extend(self.model_parts());
        }
        parts.extend(resource_parts);

        log::debug!("extracted {} documentation parts", parts.len());
        Ok(parts)
    }

    pub fn model_names(&self) -> &ModelNameMap {
        &self.model_names
    }

    pub fn into_model_names(self) -> ModelNameMap {
        self.model_names
    }

    fn api_part(&self) -> Result<DocumentationPart, ExtractError> {
        let info = self.document.info.clone().ok_or(ExtractError::MissingInfo)?;
        let properties = match self.options.info_placement {
            InfoPlacement::Nested => ApiProperties::Nested { info },
            InfoPlacement::Flattened => ApiProperties::Flattened(info),
        };
        Ok(DocumentationPart {
            location: Location::api(),
            properties: PartProperties::Api(properties),
        })
    }

    fn model_parts(&mut self) -> Vec<DocumentationPart> {
        self.model_names = ModelNameMap::default();
        let Some(schemas) = self.document.schemas_mut() else {
            return Vec::new();
        };

        rename_schemas(schemas, &mut self.model_names)
            .into_iter()
            .map(|(name, schema)| DocumentationPart {
                location: Location::model(&name),
                properties: PartProperties::Model(ModelProperties { schema }),
            })
            .collect()
    }
}

fn path_parts(path: &str, item: &PathItem) -> Result<Vec<DocumentationPart>, ExtractError> {
    let mut parts = vec![DocumentationPart {
        location: Location::resource(path),
        properties: PartProperties::Resource(ResourceProperties {}),
    }];
    parts.extend(method_parts(path, item));
    parts.extend(parameter_parts(path, item));
    parts.extend(request_body_parts(path, item));
    parts.extend(response_parts(path, item)?);
    Ok(parts)
}

fn method_parts(path: &str, item: &PathItem) -> Vec<DocumentationPart> {
    item.operations()
        .map(|(method, op)| DocumentationPart {
            location: Location::method(Some(LocationType::Method), path, method),
            properties: PartProperties::Method(MethodProperties {
                description: truthy(op.and_then(|o| o.description.as_ref())),
                summary: truthy(op.and_then(|o| o.summary.as_ref())),
            }),
        })
        .collect()
}

fn parameter_parts(path: &str, item: &PathItem) -> Vec<DocumentationPart> {
    let mut parts = Vec::new();
    for (method, op) in item.operations() {
        let params = op.and_then(|o| o.parameters.as_deref()).unwrap_or_default();
        for param in params {
            let location_type = LocationType::for_parameter(param.location());
            if location_type.is_none() {
                log::debug!(
                    "parameter {:?} of `{method} {path}` has no documentable location ({:?})",
                    param.name,
                    param.location
                );
            }
            let mut location = Location::method(location_type, path, method);
            location.name = param.name.clone();
            parts.push(DocumentationPart {
                location,
                properties: PartProperties::Described(DescriptionProperties {
                    description: truthy(param.description.as_ref()),
                }),
            });
        }
    }
    parts
}

fn request_body_parts(path: &str, item: &PathItem) -> Vec<DocumentationPart> {
    item.operations()
        .filter_map(|(method, op)| {
            let body = op?.request_body.as_ref()?;
            Some(DocumentationPart {
                location: Location::method(Some(LocationType::RequestBody), path, method),
                properties: PartProperties::Described(DescriptionProperties {
                    description: truthy(body.description.as_ref()),
                }),
            })
        })
        .collect()
}

fn response_parts(path: &str, item: &PathItem) -> Result<Vec<DocumentationPart>, ExtractError> {
    let mut parts = Vec::new();
    for (method, op) in item.operations() {
        let responses = op.and_then(|o| o.responses.as_ref()).ok_or_else(|| {
            ExtractError::MissingResponses {
                path: path.to_string(),
                method: method.to_string(),
            }
        })?;
        for (status_code, response) in responses {
            let mut location = Location::method(Some(LocationType::Response), path, method);
            location.status_code = Some(status_code.clone());
            parts.push(DocumentationPart {
                location,
                properties: PartProperties::Described(DescriptionProperties {
                    description: truthy(response.as_ref().and_then(|r| r.description.as_ref())),
                }),
            });
        }
    }
    Ok(parts)
}
