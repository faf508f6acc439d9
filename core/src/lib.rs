#![deny(missing_docs)]

//! # tsgen Core
//!
//! Core library translating Swagger definitions (springfox `«…»` generic
//! titles) into TypeScript interface declarations.

/// Shared error types.
pub mod error;

/// Generic type-name parsing (`Page«User»` -> type tree).
pub mod generics;

/// Swagger document model.
pub mod swagger;

/// Schema primitive kind -> TypeScript type mapping.
pub mod type_mapping;

/// Reference resolution, import collection and interface rendering.
pub mod translator;

pub use error::{Error, Result};
pub use generics::{parse_generics, TypeTree};
pub use swagger::{is_wrapper_key, SwaggerDefinition, SwaggerDocument, SwaggerProperty};
pub use translator::{Translator, TranslatorConfig};
pub use type_mapping::{map_primitive, TsType};
