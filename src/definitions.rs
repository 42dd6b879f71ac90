//! Definition file ingestion.
//!
//! Each section of a definition file declares one key:
//!
//! ```ini
//! [PORT]
//! description = TCP port the daemon listens on
//! type = integer
//! define = PORT
//! value = 8080
//! required = true
//! ```
//!
//! Files are applied in order and later files overwrite individual fields
//! of keys declared earlier.

use std::fs;
use std::path::Path;

use crate::diag::Diagnostics;
use crate::ini::{self, Document};
use crate::registry::Registry;
use crate::value::{parse_boolean, TypeTag};

/// Read, parse and apply one definition file.
///
/// Returns `false` when the file was skipped because it could not be read
/// or is not a valid document. Nothing from a skipped file is applied.
pub fn ingest_file(registry: &mut Registry, path: &Path, diag: &mut Diagnostics) -> bool {
    let source = path.display().to_string();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            diag.warn(source, e.to_string());
            return false;
        }
    };

    let doc = match ini::parse(&content) {
        Ok(doc) => doc,
        Err(e) => {
            diag.warn(format!("{source}:{}", e.line), format!("parse error: {e}"));
            return false;
        }
    };

    apply_document(registry, &source, &doc, diag);
    true
}

/// Apply every entry of a parsed definition document to `registry`.
///
/// `value` keys are coerced once the whole document has been applied, so
/// `type` and `value` may come in either order within a section. A default
/// that does not fit the type leaves the key without a value.
pub fn apply_document(
    registry: &mut Registry,
    source: &str,
    doc: &Document,
    diag: &mut Diagnostics,
) {
    // Sections whose type or default changed, in first-touch order
    let mut touched: Vec<&str> = Vec::new();

    for entry in &doc.entries {
        if entry.section.is_empty() {
            diag.warn(
                format!("{source}:{}", entry.line),
                format!("key outside of a section: {}", entry.key),
            );
            continue;
        }

        let section = entry.section.as_str();
        let def = registry.get_or_create(section);

        match entry.key.as_str() {
            "description" => def.description = entry.value.clone(),
            "define" => def.define = entry.value.clone(),
            "type" => {
                let ty = TypeTag::from_keyword(&entry.value).unwrap_or_else(|| {
                    diag.warn(
                        format!("{source}:{section}:type"),
                        format!("unable to parse: {}", entry.value),
                    );
                    TypeTag::String
                });
                def.set_type(ty);
                touch(&mut touched, section);
            }
            "value" => {
                def.default_text = Some(entry.value.clone());
                touch(&mut touched, section);
            }
            "required" => def.required = parse_boolean(&entry.value),
            other => diag.warn(
                format!("{source}:{section}"),
                format!("unknown key: {other}"),
            ),
        }
    }

    for section in touched {
        let Some(def) = registry.find_mut(section) else {
            continue;
        };
        let Some(text) = def.default_text.clone() else {
            continue;
        };
        if let Err(e) = def.assign(&text) {
            def.clear_value();
            diag.warn(format!("{source}:{section}:value"), e.to_string());
        }
    }
}

fn touch<'a>(touched: &mut Vec<&'a str>, section: &'a str) {
    if !touched.contains(&section) {
        touched.push(section);
    }
}
