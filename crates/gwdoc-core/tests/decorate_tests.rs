use gwdoc_core::error::{DecorateError, ExtractError};
use gwdoc_core::parse;
use gwdoc_core::parse::document::OpenApiDocument;
use gwdoc_core::{DecorationStrategy, Decorator, EXTENSION_KEY, ExtractOptions};
use serde_json::json;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const ITEMS: &str = include_str!("fixtures/items.json");

fn decorate(doc: &mut OpenApiDocument, options: ExtractOptions) {
    Decorator::new(doc, options)
        .decorate(DecorationStrategy::DocumentationPart)
        .unwrap();
}

#[test]
fn attaches_documentation_extension() {
    let mut doc = parse::from_yaml(PETSTORE).unwrap();
    decorate(&mut doc, ExtractOptions::default());

    let extension = doc
        .extensions
        .get(EXTENSION_KEY)
        .expect("should have the documentation extension");
    assert_eq!(extension["version"], json!("1.0.0"));

    let parts = extension["documentationParts"].as_array().unwrap();
    assert_eq!(parts.len(), 24);

    let api: Vec<&serde_json::Value> = parts
        .iter()
        .filter(|p| p["location"]["type"] == "API")
        .collect();
    assert_eq!(api.len(), 1);
    assert_eq!(
        api[0]["properties"]["info"],
        serde_json::to_value(doc.info.as_ref().unwrap()).unwrap()
    );
}

#[test]
fn keeps_other_top_level_fields() {
    let mut doc = parse::from_yaml(PETSTORE).unwrap();
    decorate(&mut doc, ExtractOptions::default());

    let value: serde_json::Value = serde_json::from_str(&parse::to_json(&doc).unwrap()).unwrap();
    assert_eq!(value["openapi"], json!("3.0.3"));
    assert_eq!(value["servers"][0]["url"], json!("https://api.example.com/v1"));
    assert!(value["x-amazon-apigateway-request-validators"].is_object());
    assert!(value[EXTENSION_KEY].is_object());
    // renamed in place
    assert!(value["components"]["schemas"]["ErrorBody"].is_object());
    assert!(value["components"]["schemas"].get("Error Body!").is_none());
}

#[test]
fn exposes_model_name_mapping() {
    let mut doc = parse::from_yaml(PETSTORE).unwrap();
    let mut decorator = Decorator::new(&mut doc, ExtractOptions::normalizing());
    decorator
        .decorate(DecorationStrategy::DocumentationPart)
        .unwrap();

    let names = decorator.model_names();
    assert_eq!(names.new_name("Error Body!"), Some("ErrorBody"));
    assert_eq!(names.old_name("petlist"), Some("pet_list"));
    assert_eq!(names.new_name("Pet"), Some("Pet"));
    assert!(decorator.document().extensions.contains_key(EXTENSION_KEY));
}

#[test]
fn missing_info_fails() {
    let mut doc: OpenApiDocument = serde_json::from_value(json!({"paths": {}})).unwrap();
    let err = Decorator::new(&mut doc, ExtractOptions::default())
        .decorate(DecorationStrategy::DocumentationPart)
        .unwrap_err();
    assert!(matches!(err, DecorateError::Extract(ExtractError::MissingInfo)));
    assert!(!doc.extensions.contains_key(EXTENSION_KEY));
}

#[test]
fn missing_responses_fails_without_touching_document() {
    let mut doc: OpenApiDocument = serde_json::from_value(json!({
        "info": {"version": "1"},
        "paths": {"/a": {"get": {"summary": "no responses"}}},
        "components": {"schemas": {"Needs Rename": {}}}
    }))
    .unwrap();
    let original = doc.clone();

    let err = Decorator::new(&mut doc, ExtractOptions::default())
        .decorate(DecorationStrategy::DocumentationPart)
        .unwrap_err();
    assert!(matches!(
        err,
        DecorateError::Extract(ExtractError::MissingResponses { ref path, .. }) if path == "/a"
    ));
    assert_eq!(err.to_string(), "operation `get /a` has no `responses`");
    assert_eq!(doc, original);
}

#[test]
fn missing_version_is_omitted() {
    let mut doc: OpenApiDocument =
        serde_json::from_value(json!({"info": {"title": "No version"}, "paths": {}})).unwrap();
    decorate(&mut doc, ExtractOptions::default());

    let extension = &doc.extensions[EXTENSION_KEY];
    assert!(extension.get("version").is_none());
    assert_eq!(extension["documentationParts"].as_array().unwrap().len(), 1);
}

#[test]
fn redecorating_replaces_previous_extension() {
    let mut doc = parse::from_yaml(PETSTORE).unwrap();
    decorate(&mut doc, ExtractOptions::default());
    let first = doc.extensions[EXTENSION_KEY].clone();

    let mut decorator = Decorator::new(&mut doc, ExtractOptions::default());
    decorator
        .decorate(DecorationStrategy::DocumentationPart)
        .unwrap();
    // schemas were already normalized, so every name maps onto itself
    assert_eq!(decorator.model_names().old_name("ErrorBody"), Some("ErrorBody"));

    assert_eq!(doc.extensions[EXTENSION_KEY], first);
}

#[test]
fn flattened_mode_spreads_info() {
    let mut doc = parse::from_json(ITEMS).unwrap();
    decorate(&mut doc, ExtractOptions::flattened());

    let parts = &doc.extensions[EXTENSION_KEY]["documentationParts"];
    assert_eq!(
        parts[0],
        json!({"location": {"type": "API"}, "properties": {"title": "Items", "version": "1.0"}})
    );
}

#[test]
fn end_to_end_single_path() {
    let mut doc = parse::from_json(ITEMS).unwrap();
    decorate(&mut doc, ExtractOptions::default());

    insta::assert_json_snapshot!(doc.extensions[EXTENSION_KEY], @r#"
    {
      "version": "1.0",
      "documentationParts": [
        {
          "location": {
            "type": "API"
          },
          "properties": {
            "info": {
              "title": "Items",
              "version": "1.0"
            }
          }
        },
        {
          "location": {
            "type": "RESOURCE",
            "path": "/items/{id}"
          },
          "properties": {}
        },
        {
          "location": {
            "type": "METHOD",
            "path": "/items/{id}",
            "method": "get"
          },
          "properties": {}
        },
        {
          "location": {
            "type": "PATH_PARAMETER",
            "path": "/items/{id}",
            "method": "get",
            "name": "id"
          },
          "properties": {}
        },
        {
          "location": {
            "type": "RESPONSE",
            "path": "/items/{id}",
            "method": "get",
            "statusCode": "200"
          },
          "properties": {
            "description": "OK"
          }
        }
      ]
    }
    "#);
}
