//! Report assembly: one row per distinct leaf path of a document.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use super::{flatten::flatten, path::KeyPath, resolve::resolve_path, translate::KeyTranslator};

/// Column names of the generated table.
pub const REPORT_HEADER: [&str; 3] = ["key", "key_chinese", "example_value"];

/// Distinct leaf paths of one document, ordered by their rendered string.
///
/// Ordering is plain byte-wise string order, so `a[10]` sorts before `a[2]`.
#[derive(Debug, Default)]
pub struct PathSet {
    paths: BTreeMap<String, KeyPath>,
    leaf_count: usize,
    collisions: Vec<String>,
}

impl PathSet {
    /// Flatten `document` and keep every distinct rendered path.
    ///
    /// When two different typed paths render to the same string (a key
    /// literally named `a[0]` next to an array `a`), the first one in document
    /// order wins and the rendered string is recorded as a collision.
    pub fn collect(document: &Map<String, Value>) -> Self {
        let mut set = Self::default();
        for (path, _) in flatten(document) {
            set.leaf_count += 1;
            let rendered = path.to_string();
            match set.paths.get(&rendered) {
                Some(existing) if *existing != path => {
                    if !set.collisions.contains(&rendered) {
                        set.collisions.push(rendered);
                    }
                }
                Some(_) => {}
                None => {
                    set.paths.insert(rendered, path);
                }
            }
        }
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyPath)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of leaves seen while flattening, duplicates included.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Rendered paths shared by more than one distinct typed path.
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub key: String,
    pub translated_key: String,
    /// Value found by re-resolving `key`; `None` when nothing is there.
    pub example: Option<Value>,
}

impl ReportRow {
    /// Text written to the `example_value` column.
    ///
    /// Strings are written verbatim, other values as JSON literals, and a
    /// missing value as an empty field.
    pub fn example_text(&self) -> String {
        match &self.example {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn fields(&self) -> [String; 3] {
        [
            self.key.clone(),
            self.translated_key.clone(),
            self.example_text(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    /// Leaves seen while flattening, before deduplication.
    pub leaf_count: usize,
    pub collisions: Vec<String>,
}

/// Build the report for `document`.
///
/// Fails only when the document root is not an object.
pub fn build_report(document: &Value, translator: &KeyTranslator) -> Result<Report> {
    let Value::Object(map) = document else {
        bail!("Root of the document must be an object");
    };

    let path_set = PathSet::collect(map);
    let rows = path_set
        .iter()
        .map(|(key, path)| ReportRow {
            key: key.to_string(),
            translated_key: translator.translate(key),
            example: resolve_path(document, path).cloned(),
        })
        .collect();

    Ok(Report {
        rows,
        leaf_count: path_set.leaf_count(),
        collisions: path_set.collisions().to_vec(),
    })
}
