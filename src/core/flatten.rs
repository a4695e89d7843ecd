//! Leaf enumeration over a JSON document.
//!
//! Objects are always descended into. Arrays are expanded by index, but only
//! their object elements are descended into: an array nested directly in an
//! array is yielded as a single opaque leaf.

use std::{iter::Enumerate, slice};

use serde_json::{Map, Value, map};

use super::path::KeyPath;

/// Returns a lazy iterator over every `(path, leaf)` pair of `document`,
/// in document order.
pub fn flatten(document: &Map<String, Value>) -> Flatten<'_> {
    Flatten {
        stack: vec![Frame::Object {
            prefix: KeyPath::new(),
            entries: document.iter(),
        }],
    }
}

/// Iterator returned by [`flatten`].
///
/// Walks the document with an explicit stack, so nesting depth is bounded by
/// memory rather than by the call stack.
pub struct Flatten<'a> {
    stack: Vec<Frame<'a>>,
}

enum Frame<'a> {
    Object {
        prefix: KeyPath,
        entries: map::Iter<'a>,
    },
    Array {
        prefix: KeyPath,
        elements: Enumerate<slice::Iter<'a, Value>>,
    },
}

enum Visit<'a> {
    Descend(Frame<'a>),
    Leaf(KeyPath, &'a Value),
    Exhausted,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (KeyPath, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let visit = match self.stack.last_mut()? {
                Frame::Object { prefix, entries } => match entries.next() {
                    Some((key, value)) => {
                        let path = prefix.field(key.as_str());
                        match value {
                            Value::Object(map) => Visit::Descend(Frame::Object {
                                prefix: path,
                                entries: map.iter(),
                            }),
                            Value::Array(items) => Visit::Descend(Frame::Array {
                                prefix: path,
                                elements: items.iter().enumerate(),
                            }),
                            leaf => Visit::Leaf(path, leaf),
                        }
                    }
                    None => Visit::Exhausted,
                },
                Frame::Array { prefix, elements } => match elements.next() {
                    Some((index, value)) => {
                        let path = prefix.index(index);
                        match value {
                            Value::Object(map) => Visit::Descend(Frame::Object {
                                prefix: path,
                                entries: map.iter(),
                            }),
                            // Nested arrays are not expanded.
                            leaf => Visit::Leaf(path, leaf),
                        }
                    }
                    None => Visit::Exhausted,
                },
            };

            match visit {
                Visit::Descend(frame) => self.stack.push(frame),
                Visit::Leaf(path, value) => return Some((path, value)),
                Visit::Exhausted => {
                    self.stack.pop();
                }
            }
        }
    }
}
