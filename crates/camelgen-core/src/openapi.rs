//! Swagger specification loading.
//!
//! This module reads a Swagger 2.0 document (JSON or YAML, from disk or over
//! HTTP) and converts it into the [`Specification`] model walked by the route
//! generator. Path and operation order of the source document is kept.
//!
//! # Examples
//!
//! ```no_run
//! use camelgen_core::openapi::OpenApiContext;
//! use camelgen_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let context = OpenApiContext::from_file("petstore.json").await?;
//! if let Some(title) = context.title() {
//!     println!("API Title: {}", title);
//! }
//! let spec = context.specification()?;
//! println!("{} operations", spec.operation_count());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::model::{
    HttpMethod, Items, Operation, Parameter, ParameterKind, ParameterLocation, PathItem,
    SerializableParameter, Specification,
};
use crate::Error;

// External imports (alphabetized)
use serde_json::{Map as JsonMap, Value as JsonValue};
use tokio::fs;
use url::Url;

/// A parsed Swagger document
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The raw JSON value of the document
    pub json: JsonValue,
}

impl OpenApiContext {
    /// Load from a file path or an HTTP(S) URL (supports both YAML and JSON)
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();

        if is_remote(location) {
            return Self::from_url(location).await;
        }

        Self::from_file(location).await
    }

    /// Load from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let context = Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!(
                "Failed to parse Swagger spec at {}: {}",
                path.display(),
                e
            ))
        })?;
        log::info!("Loaded Swagger spec from {}", path.display());
        Ok(context)
    }

    /// Load from a URL (supports both YAML and JSON)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        let response = reqwest::get(url).await?;

        if !response.status().is_success() {
            return Err(Error::openapi(format!(
                "Failed to fetch Swagger spec from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await?;

        let context = Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!("Failed to parse Swagger spec from {}: {}", url, e))
        })?;
        log::info!("Loaded Swagger spec from {}", url);
        Ok(context)
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<Self, String> {
        if let Ok(json) = serde_json::from_str(content) {
            return Ok(Self { json });
        }

        if let Ok(json) = serde_yaml::from_str(content) {
            return Ok(Self { json });
        }

        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Get a reference to the raw JSON value
    pub fn as_json(&self) -> &JsonValue {
        &self.json
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// Build the route generator's model from the document.
    ///
    /// A missing `paths` object yields a specification without paths and a
    /// missing title an empty one. Parameters with an unknown `in` value or
    /// an unresolvable `$ref` are errors.
    pub fn specification(&self) -> crate::Result<Specification> {
        if self.json.get("swagger").and_then(JsonValue::as_str) != Some("2.0") {
            log::warn!("Document does not declare `swagger: \"2.0\"`; reading it as Swagger 2.0");
        }

        let mut paths = Vec::new();
        if let Some(path_map) = self.json.get("paths").and_then(JsonValue::as_object) {
            for (path, item) in path_map {
                if path.starts_with("x-") {
                    continue;
                }
                paths.push((path.clone(), self.path_item(path, item)?));
            }
        }

        Ok(Specification {
            title: self.title().unwrap_or_default().to_string(),
            paths,
        })
    }

    fn path_item(&self, path: &str, item: &JsonValue) -> crate::Result<PathItem> {
        let mut operations = Vec::new();
        for method in HttpMethod::ALL {
            if let Some(op) = item.get(method.as_lowercase()).and_then(JsonValue::as_object) {
                let operation = self.operation(op).map_err(|e| {
                    Error::openapi(format!("{} {}: {}", method.as_lowercase(), path, e))
                })?;
                operations.push((method, operation));
            }
        }
        Ok(PathItem { operations })
    }

    fn operation(&self, op: &JsonMap<String, JsonValue>) -> crate::Result<Operation> {
        let parameters = match op.get("parameters").and_then(JsonValue::as_array) {
            Some(params) => params
                .iter()
                .map(|param| self.parameter(self.resolve(param)?))
                .collect::<crate::Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Operation {
            id: str_field(op, "operationId").unwrap_or_default(),
            description: str_field(op, "description"),
            consumes: string_list(op.get("consumes")),
            produces: string_list(op.get("produces")),
            parameters,
        })
    }

    /// Follow a local `$ref` such as `#/parameters/limitParam`.
    fn resolve<'a>(&'a self, value: &'a JsonValue) -> crate::Result<&'a JsonValue> {
        match value.get("$ref").and_then(JsonValue::as_str) {
            Some(reference) => reference
                .strip_prefix('#')
                .and_then(|pointer| self.json.pointer(pointer))
                .ok_or_else(|| Error::openapi(format!("Unresolved reference '{}'", reference))),
            None => Ok(value),
        }
    }

    fn parameter(&self, param: &JsonValue) -> crate::Result<Parameter> {
        let map = param
            .as_object()
            .ok_or_else(|| Error::openapi("Parameter is not an object"))?;

        let name = str_field(map, "name").unwrap_or_default();
        let in_ = map
            .get("in")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::openapi(format!("Parameter '{}' has no 'in' field", name)))?;
        let location = ParameterLocation::parse(in_).ok_or_else(|| {
            Error::openapi(format!(
                "Parameter '{}' has unsupported location '{}'",
                name, in_
            ))
        })?;

        let kind = match location {
            ParameterLocation::Body => ParameterKind::Body {
                schema: map.get("schema").cloned(),
            },
            _ => ParameterKind::Serializable(SerializableParameter {
                data_type: str_field(map, "type"),
                default_value: map
                    .get("default")
                    .filter(|value| !value.is_null())
                    .map(source_text),
                allowable_values: map
                    .get("enum")
                    .and_then(JsonValue::as_array)
                    .map(|values| {
                        values
                            .iter()
                            .filter(|value| !value.is_null())
                            .map(source_text)
                            .collect()
                    })
                    .unwrap_or_default(),
                collection_format: str_field(map, "collectionFormat"),
                items: map.get("items").and_then(JsonValue::as_object).map(|items| Items {
                    data_type: str_field(items, "type"),
                }),
            }),
        };

        Ok(Parameter {
            name,
            location,
            required: map.get("required").and_then(JsonValue::as_bool),
            description: str_field(map, "description"),
            kind,
        })
    }
}

fn is_remote(location: &str) -> bool {
    Url::parse(location)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn str_field(map: &JsonMap<String, JsonValue>, key: &str) -> Option<String> {
    map.get(key).and_then(JsonValue::as_str).map(String::from)
}

fn string_list(value: Option<&JsonValue>) -> Vec<String> {
    value
        .and_then(JsonValue::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(JsonValue::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Strings keep their raw text, everything else its compact JSON form.
fn source_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn context(json: JsonValue) -> OpenApiContext {
        OpenApiContext { json }
    }

    #[tokio::test]
    async fn test_from_file_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("petstore.yaml");
        let yaml_content = r#"
swagger: "2.0"
info:
  title: "Pet Store v2!!"
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      produces:
        - application/json
"#;
        tokio::fs::write(&file_path, yaml_content).await?;

        let ctx = OpenApiContext::from_file(&file_path).await?;
        assert_eq!(ctx.title(), Some("Pet Store v2!!"));
        assert_eq!(ctx.version(), Some("1.0.0"));

        let spec = ctx.specification()?;
        assert_eq!(spec.paths.len(), 1);
        assert_eq!(spec.paths[0].1.operations[0].1.id, "listPets");
        Ok(())
    }

    #[tokio::test]
    async fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let err = OpenApiContext::from_file(dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_content_rejects_garbage() {
        assert!(OpenApiContext::parse_content("{ not: [valid").is_err());
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://petstore.swagger.io/v2/swagger.json"));
        assert!(is_remote("http://localhost:8080/swagger.yaml"));
        assert!(!is_remote("petstore.json"));
        assert!(!is_remote("/tmp/petstore.json"));
        assert!(!is_remote("file:///tmp/petstore.json"));
    }

    #[test]
    fn test_path_order_is_preserved() -> crate::Result<()> {
        let ctx = context(json!({
            "swagger": "2.0",
            "info": {"title": "t"},
            "paths": {
                "/zebra": {"get": {"operationId": "z"}},
                "/apple": {"get": {"operationId": "a"}},
                "/mango": {"get": {"operationId": "m"}}
            }
        }));
        let paths: Vec<_> = ctx
            .specification()?
            .paths
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(paths, vec!["/zebra", "/apple", "/mango"]);
        Ok(())
    }

    #[test]
    fn test_methods_use_canonical_order() -> crate::Result<()> {
        let ctx = context(json!({
            "paths": {
                "/pets": {
                    "parameters": [{"name": "ignored", "in": "query"}],
                    "x-extra": true,
                    "post": {"operationId": "addPet"},
                    "delete": {"operationId": "deletePets"},
                    "get": {"operationId": "listPets"}
                }
            }
        }));
        let spec = ctx.specification()?;
        let methods: Vec<_> = spec.paths[0].1.operations.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            methods,
            vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete]
        );
        Ok(())
    }

    #[test]
    fn test_head_follows_patch() -> crate::Result<()> {
        let ctx = context(json!({
            "paths": {
                "/pets": {
                    "options": {"operationId": "petOptions"},
                    "head": {"operationId": "headPets"},
                    "patch": {"operationId": "patchPets"},
                    "post": {"operationId": "addPet"}
                }
            }
        }));
        let spec = ctx.specification()?;
        let ids: Vec<_> = spec.paths[0]
            .1
            .operations
            .iter()
            .map(|(_, op)| op.id.as_str())
            .collect();
        assert_eq!(ids, vec!["addPet", "patchPets", "headPets", "petOptions"]);
        Ok(())
    }

    #[test]
    fn test_missing_paths_and_title() -> crate::Result<()> {
        let spec = context(json!({"swagger": "2.0"})).specification()?;
        assert_eq!(spec.title, "");
        assert!(spec.paths.is_empty());
        Ok(())
    }

    #[test]
    fn test_parameter_kinds() -> crate::Result<()> {
        let ctx = context(json!({
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "findPets",
                        "parameters": [
                            {
                                "name": "status",
                                "in": "query",
                                "type": "array",
                                "collectionFormat": "multi",
                                "items": {"type": "string", "enum": ["available", "sold"]},
                                "enum": ["available", "sold"]
                            },
                            {"name": "limit", "in": "query", "type": "integer", "default": 20},
                            {"name": "body", "in": "body", "required": true, "schema": {"$ref": "#/definitions/Pet"}},
                            {"name": "file", "in": "formData", "type": "file"}
                        ]
                    }
                }
            }
        }));
        let spec = ctx.specification()?;
        let params = &spec.paths[0].1.operations[0].1.parameters;
        assert_eq!(params.len(), 4);

        match &params[0].kind {
            ParameterKind::Serializable(s) => {
                assert_eq!(s.data_type.as_deref(), Some("array"));
                assert_eq!(s.collection_format.as_deref(), Some("multi"));
                assert_eq!(s.allowable_values, vec!["available", "sold"]);
                assert_eq!(
                    s.items.as_ref().and_then(|i| i.data_type.as_deref()),
                    Some("string")
                );
            }
            other => panic!("unexpected kind {:?}", other),
        }
        match &params[1].kind {
            ParameterKind::Serializable(s) => assert_eq!(s.default_value.as_deref(), Some("20")),
            other => panic!("unexpected kind {:?}", other),
        }
        assert!(matches!(params[2].kind, ParameterKind::Body { schema: Some(_) }));
        assert_eq!(params[2].required, Some(true));
        assert_eq!(params[1].required, None);
        assert_eq!(params[3].location, ParameterLocation::FormData);
        Ok(())
    }

    #[test]
    fn test_null_default_and_enum_members_are_dropped() -> crate::Result<()> {
        let ctx = context(json!({
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "parameters": [
                            {"name": "tag", "in": "query", "type": "string", "default": null},
                            {"name": "size", "in": "query", "type": "string", "enum": ["s", null, "m"]}
                        ]
                    }
                }
            }
        }));
        let spec = ctx.specification()?;
        let params = &spec.paths[0].1.operations[0].1.parameters;
        match (&params[0].kind, &params[1].kind) {
            (ParameterKind::Serializable(tag), ParameterKind::Serializable(size)) => {
                assert_eq!(tag.default_value, None);
                assert_eq!(size.allowable_values, vec!["s", "m"]);
            }
            other => panic!("unexpected kinds {:?}", other),
        }

        let artifact = crate::restdsl::assemble(&spec);
        assert!(!artifact.statements[1]
            .method_names()
            .contains(&"defaultValue"));
        Ok(())
    }

    #[test]
    fn test_parameter_ref_resolution() -> crate::Result<()> {
        let ctx = context(json!({
            "parameters": {
                "limitParam": {"name": "limit", "in": "query", "type": "integer"}
            },
            "paths": {
                "/pets": {"get": {"parameters": [{"$ref": "#/parameters/limitParam"}]}}
            }
        }));
        let spec = ctx.specification()?;
        assert_eq!(spec.paths[0].1.operations[0].1.parameters[0].name, "limit");
        Ok(())
    }

    #[test]
    fn test_unresolved_ref_is_error() {
        let ctx = context(json!({
            "paths": {"/pets": {"get": {"parameters": [{"$ref": "#/parameters/missing"}]}}}
        }));
        let err = ctx.specification().unwrap_err();
        assert!(err.to_string().contains("#/parameters/missing"));
        assert!(err.to_string().contains("get /pets"));
    }

    #[test]
    fn test_unknown_location_is_error() {
        let ctx = context(json!({
            "paths": {"/pets": {"get": {"parameters": [{"name": "sid", "in": "cookie"}]}}}
        }));
        assert!(matches!(ctx.specification(), Err(Error::OpenApi(_))));
    }

    #[test]
    fn test_operation_without_id() -> crate::Result<()> {
        let ctx = context(json!({"paths": {"/": {"get": {}}}}));
        let spec = ctx.specification()?;
        let op = &spec.paths[0].1.operations[0].1;
        assert_eq!(op.id, "");
        assert!(op.consumes.is_empty());
        assert!(op.description.is_none());
        Ok(())
    }
}
