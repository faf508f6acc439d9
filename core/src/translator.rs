#![deny(missing_docs)]

//! # Translator
//!
//! Turns one [`SwaggerDefinition`] into one TypeScript interface
//! declaration: resolves property types (references, generic-parameter
//! substitution, array expansion), collects the deduplicated import block
//! and derives the canonical kebab-case file name.

use crate::error::{Error, Result};
use crate::generics::{parse_generics, TypeTree};
use crate::swagger::{SwaggerDefinition, SwaggerProperty};
use crate::type_mapping::{map_primitive, TsType};
use regex::Regex;
use std::sync::OnceLock;

/// Root names that never produce an import (built-in scalars/containers).
const BUILTIN_TYPE_NAMES: [&str; 5] = ["string", "number", "Map", "Array", "object"];

/// Explicit configuration for name and import-path construction.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Prefix prepended to every generated interface name.
    pub interface_prefix: String,
    /// Directory prefix used inside generated import paths.
    pub import_dir: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            interface_prefix: "Api".to_string(),
            import_dir: ".".to_string(),
        }
    }
}

/// Translates definitions under one [`TranslatorConfig`].
///
/// Holds no other state: every translation starts from a fresh import
/// accumulator and generic-binding set, so definitions can be processed in
/// any order (or in parallel) without interference.
#[derive(Debug, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Creates a translator with the given configuration.
    pub fn new(config: TranslatorConfig) -> Self {
        Translator { config }
    }

    /// Renders the interface name for a definition title.
    ///
    /// A generic title gets a positional parameter list sized to its arity:
    /// `"Page«TransferRecordRes,User»"` -> `"ApiPage<T0,T1>"`. Parameter
    /// names are always `T<index>`, never derived from the argument's own
    /// name.
    pub fn interface_name(&self, title: &str) -> Result<String> {
        let tree = parse_generics(title)?;
        Ok(self.interface_name_of(&tree))
    }

    fn interface_name_of(&self, tree: &TypeTree) -> String {
        let mut name = format!("{}{}", self.config.interface_prefix, tree.name);
        if tree.is_generic() {
            let params: Vec<String> = (0..tree.args.len()).map(|i| format!("T{}", i)).collect();
            name.push('<');
            name.push_str(&params.join(","));
            name.push('>');
        }
        name
    }

    /// Derives the canonical file name (without extension) for a title.
    ///
    /// The interface name is stripped of any `<…>` parameter list, then
    /// kebab-cased: a `-` before every uppercase letter except the first
    /// character, all letters lowered. `"HttpResponse«ActivityDetailRes»"`
    /// -> `"api-http-response"`.
    pub fn file_name(&self, title: &str) -> Result<String> {
        let interface_name = self.interface_name(title)?;
        let root = interface_name
            .split('<')
            .next()
            .unwrap_or(&interface_name);
        Ok(kebab_case(root))
    }

    /// Renders a fully-expanded qualified type name for a parsed tree:
    /// every node gets the interface prefix and generic arguments are
    /// expanded recursively (`Page«ActivityRecord»` ->
    /// `ApiPage<ApiActivityRecord>`).
    pub fn type_name(&self, tree: &TypeTree) -> String {
        let mut name = format!("{}{}", self.config.interface_prefix, tree.name);
        if tree.is_generic() {
            let args: Vec<String> = tree.args.iter().map(|arg| self.type_name(arg)).collect();
            name.push('<');
            name.push_str(&args.join(","));
            name.push('>');
        }
        name
    }

    /// Collects the import statements needed to use `tree`, appending them
    /// to `imports` in first-discovery order (root first, then children
    /// depth-first left-to-right), skipping statements already present.
    ///
    /// Built-in scalar/container roots produce no import record themselves,
    /// but their generic arguments are still followed.
    pub fn collect_imports(&self, tree: &TypeTree, imports: &mut Vec<String>) {
        if !BUILTIN_TYPE_NAMES.contains(&tree.name.as_str()) {
            let type_name = format!("{}{}", self.config.interface_prefix, tree.name);
            let file_name = kebab_case(&type_name);
            let statement = format!(
                "import {{ {} }} from '{}/{}';",
                type_name, self.config.import_dir, file_name
            );
            if !imports.contains(&statement) {
                imports.push(statement);
            }
        }

        for arg in &tree.args {
            self.collect_imports(arg, imports);
        }
    }

    /// Resolves the rendered TypeScript type of one property.
    ///
    /// Decision order:
    /// 1. a `$ref` whose root name equals a binding's root name renders as
    ///    the positional placeholder `T<index>`, with no import; root-name
    ///    comparison only, generic arguments on either side are ignored;
    /// 2. any other `$ref` registers its imports and renders the fully
    ///    expanded qualified name;
    /// 3. primitive kinds map directly; the array marker recurses into the
    ///    item schema (`Array<inner>`, or `Array<any>` without one).
    ///
    /// `imports` is the caller-owned, per-file accumulator; append order is
    /// first-seen, depth-first.
    pub fn property_type(
        &self,
        property: &SwaggerProperty,
        imports: &mut Vec<String>,
        bindings: &[TypeTree],
    ) -> Result<String> {
        if let Some(reference) = &property.reference {
            let name = reference_target(reference);
            let tree = parse_generics(name)?;

            for (index, binding) in bindings.iter().enumerate() {
                if binding.name == tree.name {
                    return Ok(format!("T{}", index));
                }
            }

            self.collect_imports(&tree, imports);
            return Ok(self.type_name(&tree));
        }

        match map_primitive(property.schema_type.as_deref()) {
            TsType::Array => match &property.items {
                Some(items) => {
                    let inner = self.property_type(items, imports, bindings)?;
                    Ok(format!("Array<{}>", inner))
                }
                None => Ok(TsType::Array.to_string()),
            },
            other => Ok(other.to_string()),
        }
    }

    /// Translates a definition into its `(file_name, file_content)` pair.
    ///
    /// # Returns
    ///
    /// * `Err` when the definition has no title or a type name inside it is
    ///   malformed; the error aborts only this definition.
    pub fn translate(&self, definition: &SwaggerDefinition) -> Result<(String, String)> {
        let title = definition
            .title
            .as_deref()
            .ok_or_else(|| Error::General("definition has no title".to_string()))?;

        let title_tree = parse_generics(title)?;
        let interface_name = self.interface_name_of(&title_tree);
        let bindings = &title_tree.args;

        let mut imports = Vec::new();
        let mut members = Vec::new();

        match &definition.properties {
            None => members.push("  [key: string]: any;".to_string()),
            Some(properties) => {
                for (name, property) in properties {
                    let rendered = self.property_type(property, &mut imports, bindings)?;
                    if let Some(description) = &property.description {
                        members.push(format!("  /**\n   * {}\n   */", description));
                    }
                    let optional = property.allow_empty_value.unwrap_or(false);
                    members.push(format!(
                        "  {}{}: {};",
                        name,
                        if optional { "?" } else { "" },
                        rendered
                    ));
                }
            }
        }

        let mut lines = imports;
        lines.push(String::new());
        if let Some(description) = &definition.description {
            lines.push(format!("/**\n * {}\n */", description));
        }
        lines.push(format!("export interface {} {{", interface_name));
        lines.append(&mut members);
        lines.push("}".to_string());
        lines.push(String::new());

        let file_name = self.file_name(title)?;
        Ok((file_name, lines.join("\n")))
    }
}

/// Kebab-cases an interface root name: a `-` before every uppercase letter
/// except the first character, all letters lowered.
fn kebab_case(root: &str) -> String {
    let mut file_name = String::with_capacity(root.len() + 4);
    for (index, ch) in root.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                file_name.push('-');
            }
            file_name.push(ch.to_ascii_lowercase());
        } else {
            file_name.push(ch);
        }
    }
    file_name
}

/// Extracts the definition name out of a `#/definitions/<name>` pointer.
///
/// A pointer that does not match the pattern is used verbatim (best-effort
/// degrade; the core never validates against the full definition set).
fn reference_target(reference: &str) -> &str {
    static REF_RE: OnceLock<Regex> = OnceLock::new();
    let re = REF_RE
        .get_or_init(|| Regex::new(r"#/definitions/([^/]*)$").expect("Invalid regex constant"));

    match re.captures(reference) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(reference),
        None => reference,
    }
}
