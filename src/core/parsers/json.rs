use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::TranslationTable;

/// Read and parse the input document.
///
/// The root must be a JSON object; key order is kept as written.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    parse_document(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

pub fn parse_document(content: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        bail!("Root of the document must be an object");
    }
    Ok(value)
}

/// Read a translation table from a JSON object of `"name": "localized name"`.
pub fn load_translation_table(path: &Path) -> Result<TranslationTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {:?}", path))?;
    parse_translation_table(&content)
        .with_context(|| format!("Failed to parse translation file: {:?}", path))
}

pub fn parse_translation_table(content: &str) -> Result<TranslationTable> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(map) = value else {
        bail!("Translation table must be a JSON object");
    };

    let mut entries = Vec::with_capacity(map.len());
    for (name, localized) in map {
        match localized {
            Value::String(localized) => entries.push((name, localized)),
            other => bail!(
                "Translation for '{}' must be a string, found {}",
                name,
                other
            ),
        }
    }
    Ok(entries.into_iter().collect())
}
