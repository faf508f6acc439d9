#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts Swagger primitive kinds into TypeScript types. Total over any
//! input: unrecognized or absent kinds degrade to `any` so a newer document
//! never fails translation on an unmodeled kind.

use std::fmt::Display;

/// The TypeScript types a schema primitive kind can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsType {
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `any`, the opaque/dynamic fallback.
    Any,
    /// `{[key: string]: any}`, a string-keyed dynamic record.
    Record,
    /// `Array<…>` container marker; the resolver expands the item type.
    Array,
}

impl Display for TsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TsType::Number => write!(f, "number"),
            TsType::String => write!(f, "string"),
            TsType::Boolean => write!(f, "boolean"),
            TsType::Any => write!(f, "any"),
            TsType::Record => write!(f, "{{[key: string]: any}}"),
            // Rendered directly only when no item schema is available.
            TsType::Array => write!(f, "Array<any>"),
        }
    }
}

/// Maps a schema primitive kind to its TypeScript type. Never fails.
pub fn map_primitive(kind: Option<&str>) -> TsType {
    match kind {
        Some("integer") | Some("double") | Some("float") | Some("number") | Some("int") => {
            TsType::Number
        }
        Some("string") => TsType::String,
        Some("boolean") => TsType::Boolean,
        Some("Map") => TsType::Record,
        Some("array") | Some("List") => TsType::Array,
        // "object", unknown kinds and absent kinds are all opaque.
        _ => TsType::Any,
    }
}
