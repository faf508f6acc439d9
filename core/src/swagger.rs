#![deny(missing_docs)]

//! # Swagger Document Model
//!
//! serde model for the subset of a Swagger 2 document this tool consumes:
//! the `definitions` map and the fields of each definition and property.
//! Property maps are `IndexMap`s so generated output follows document order.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Top-level document, decoded from the fetched JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwaggerDocument {
    /// API metadata.
    #[serde(default)]
    pub info: SwaggerInfo,

    /// Named schema entities, in document order.
    #[serde(default)]
    pub definitions: IndexMap<String, SwaggerDefinition>,
}

/// The `info` block of the document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwaggerInfo {
    /// API title.
    pub title: Option<String>,
    /// API version string.
    pub version: Option<String>,
    /// API description.
    pub description: Option<String>,
}

/// One named schema entity to be translated into one interface declaration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwaggerDefinition {
    /// Model title; uses the `«…»` generic-name convention when generic.
    pub title: Option<String>,

    /// Model description.
    pub description: Option<String>,

    /// Names of required properties.
    pub required: Option<Vec<String>>,

    /// Property map, in document order. `None` means an untyped definition.
    pub properties: Option<IndexMap<String, SwaggerProperty>>,

    /// Schema type (usually `"object"`).
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
}

/// One field of a definition.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwaggerProperty {
    /// Schema primitive kind (`"integer"`, `"string"`, `"array"`, …).
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// Value format hint (`"int32"`, `"double"`, …). Unused by the mapper
    /// but kept so round-tripping a document is lossless.
    pub format: Option<String>,

    /// Field description.
    pub description: Option<String>,

    /// Whether the field may be empty; rendered as an optional member.
    #[serde(rename = "allowEmptyValue")]
    pub allow_empty_value: Option<bool>,

    /// Item schema for array kinds.
    pub items: Option<Box<SwaggerProperty>>,

    /// Reference to another definition, e.g. `#/definitions/ActDetail`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Enumerated values, when the field is an enum.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
}

impl SwaggerDocument {
    /// Decodes a raw Swagger JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::General(format!("Failed to parse Swagger JSON: {}", e)))
    }
}

/// Whether a raw definition key is a bare wrapper-container name
/// (`Map«…»` or `List«…»` at top level). Such keys describe synthetic
/// container instantiations, not translatable models, and are skipped by
/// the batch driver.
pub fn is_wrapper_key(key: &str) -> bool {
    static WRAPPER_RE: OnceLock<Regex> = OnceLock::new();
    let re = WRAPPER_RE
        .get_or_init(|| Regex::new(r"^(Map|List)«[\s\S]*»$").expect("Invalid regex constant"));
    re.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_definition() {
        let json = r#"{
            "info": { "title": "demo", "version": "1.0" },
            "definitions": {
                "Notice": {
                    "title": "Notice",
                    "description": "公告",
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "content": {
                            "type": "string",
                            "description": "内容",
                            "allowEmptyValue": true
                        }
                    }
                }
            }
        }"#;

        let doc = SwaggerDocument::from_json(json).unwrap();
        assert_eq!(doc.info.title.as_deref(), Some("demo"));

        let notice = &doc.definitions["Notice"];
        assert_eq!(notice.title.as_deref(), Some("Notice"));

        let properties = notice.properties.as_ref().unwrap();
        // IndexMap preserves document order.
        let names: Vec<&String> = properties.keys().collect();
        assert_eq!(names, ["id", "content"]);
        assert_eq!(properties["content"].allow_empty_value, Some(true));
    }

    #[test]
    fn test_decode_ref_property() {
        let json = r##"{ "$ref": "#/definitions/ActDetail" }"##;
        let prop: SwaggerProperty = serde_json::from_str(json).unwrap();
        assert_eq!(prop.reference.as_deref(), Some("#/definitions/ActDetail"));
        assert!(prop.schema_type.is_none());
    }

    #[test]
    fn test_wrapper_keys() {
        assert!(is_wrapper_key("Map«string,object»"));
        assert!(is_wrapper_key("List«TransferRecordRes»"));
        assert!(!is_wrapper_key("Page«TransferRecordRes»"));
        assert!(!is_wrapper_key("HttpResponse«List«Version»»"));
        assert!(!is_wrapper_key("Notice"));
    }

    #[test]
    fn test_invalid_json_is_general_error() {
        let err = SwaggerDocument::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::General(_)));
    }
}
