#![deny(missing_docs)]

//! # Generate Command
//!
//! The batch driver: fetches the Swagger document, filters out wrapper
//! container keys, translates every remaining definition through the core
//! and writes one `.ts` file per interface. Writes are idempotent and
//! file-name collisions across the batch are an error, never an overwrite.

use crate::error::{CliError, CliResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tsgen_core::{is_wrapper_key, Error, SwaggerDocument, Translator, TranslatorConfig};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// URI of the Swagger JSON document (http(s), or a local file path).
    pub uri: String,

    /// Output directory for the generated interface files.
    #[clap(short, long, default_value = "./api")]
    pub output: PathBuf,

    /// Prefix prepended to every generated interface name.
    #[clap(long, default_value = "Api")]
    pub prefix: String,
}

/// Executes the generation.
///
/// Per-definition failures (malformed generic titles, missing titles) are
/// reported to stderr and skipped; the batch continues. Fetch failures and
/// file-name collisions abort the whole run.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let json = fetch_document(&args.uri)?;
    let document = SwaggerDocument::from_json(&json)?;

    let translator = Translator::new(TranslatorConfig {
        interface_prefix: args.prefix.clone(),
        import_dir: ".".to_string(),
    });

    // file name -> definition key, for collision detection across the batch
    let mut emitted: HashMap<String, String> = HashMap::new();
    let mut generated = 0usize;

    for (key, definition) in &document.definitions {
        if is_wrapper_key(key) {
            continue;
        }
        if definition.title.is_none() {
            eprintln!("skip {}: definition has no title", key);
            continue;
        }

        let (file_name, content) = match translator.translate(definition) {
            Ok(pair) => pair,
            Err(e @ Error::MalformedGenericExpression(_)) => {
                eprintln!("skip {}: {}", key, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(previous) = emitted.insert(file_name.clone(), key.clone()) {
            return Err(CliError::DuplicateFileName(format!(
                "{}.ts ({} and {})",
                file_name, previous, key
            )));
        }

        if !args.output.exists() {
            fs::create_dir_all(&args.output)?;
        }

        let path = args.output.join(format!("{}.ts", file_name));
        if write_if_changed(&path, &content)? {
            println!("write {}", path.display());
        } else {
            println!("up-to-date {}", path.display());
        }
        generated += 1;
    }

    println!("generated {} interface(s) in {}", generated, args.output.display());
    Ok(())
}

/// Retrieves the raw document. Plain paths are read from disk; anything
/// with an http(s) scheme is fetched over the network.
fn fetch_document(uri: &str) -> CliResult<String> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let body = ureq::get(uri).call()?.body_mut().read_to_string()?;
        Ok(body)
    } else {
        Ok(fs::read_to_string(uri)?)
    }
}

/// Writes `content` to `path`, skipping the write when the on-disk content
/// is already byte-identical. Returns whether a write happened.
fn write_if_changed(path: &Path, content: &str) -> CliResult<bool> {
    if path.exists() {
        let existing = fs::read_to_string(path)?;
        if existing == content {
            return Ok(false);
        }
    }
    fs::write(path, content)?;
    Ok(true)
}
