//! In-memory view of a Swagger 2.0 specification.
//!
//! These types are what the route generator walks. They are produced by the
//! loader in [`crate::openapi`] and are never mutated afterwards. Every
//! collection keeps the order of the source document, because that order
//! becomes the order of the generated REST DSL statements.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Top level specification document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// `info.title` of the document
    pub title: String,
    /// Path templates with their operations, in document order
    pub paths: Vec<(String, PathItem)>,
}

impl Specification {
    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.iter().map(|(_, item)| item.operations.len()).sum()
    }
}

/// Operations declared under a single path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub operations: Vec<(HttpMethod, Operation)>,
}

/// HTTP verbs a Swagger 2.0 path item can declare.
///
/// The declaration order here is the canonical iteration order of a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Lower-case verb, which is also the REST DSL method name.
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Head => "head",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_lowercase())
    }
}

/// One operation bound to a method and path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// `operationId`; empty when the document omits it
    pub id: String,
    pub description: Option<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub parameters: Vec<Parameter>,
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterLocation {
    #[serde(rename = "query")]
    Query,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "path")]
    Path,
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "formData")]
    FormData,
}

impl ParameterLocation {
    /// Swagger spelling of the location. Matches the `RestParamType` constants.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
        }
    }

    /// Parse the value of a parameter's `in` field.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "path" => Some(ParameterLocation::Path),
            "body" => Some(ParameterLocation::Body),
            "formData" => Some(ParameterLocation::FormData),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    /// `None` when the document does not say; the flag is then not emitted
    pub required: Option<bool>,
    pub description: Option<String>,
    pub kind: ParameterKind,
}

/// Location specific part of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterKind {
    /// Query, header, path and form parameters carry serialization metadata.
    Serializable(SerializableParameter),
    /// Body parameters are described by a schema only.
    Body { schema: Option<JsonValue> },
}

/// Serialization metadata of a non-body parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializableParameter {
    /// `type`, e.g. `string`, `integer` or `array`
    pub data_type: Option<String>,
    /// `default`, already rendered as source text
    pub default_value: Option<String>,
    /// `enum`
    pub allowable_values: Vec<String>,
    /// `collectionFormat`, e.g. `csv` or `multi`
    pub collection_format: Option<String>,
    /// `items`, only meaningful for arrays
    pub items: Option<Items>,
}

/// Item specification of an array parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Items {
    pub data_type: Option<String>,
}
