//! Looking values up by key path.
//!
//! Every kind of miss (wrong container, missing key, index out of bounds)
//! collapses into `None`. Callers cannot tell which step failed.

use serde_json::Value;

use super::path::{KeyPath, Step};

/// Resolve a rendered path such as `product.category[0]` against `document`.
///
/// The path is tokenized with [`KeyPath::parse_lossy`], so a digit-only token
/// always indexes a sequence. A map key named `"123"` is not reachable
/// through this form; use [`resolve_path`] with a typed path instead.
pub fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_path(document, &KeyPath::parse_lossy(path))
}

/// Resolve a typed path against `document`.
pub fn resolve_path<'a>(document: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.steps()
        .iter()
        .try_fold(document, |current, step| match (step, current) {
            (Step::Field(name), Value::Object(map)) => map.get(name),
            (Step::Index(index), Value::Array(items)) => items.get(*index),
            _ => None,
        })
}
