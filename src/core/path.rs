//! Typed key paths.
//!
//! A [`KeyPath`] is a sequence of field and index steps from the document root
//! to a leaf. Internally the steps stay typed, so a field literally named `"0"`
//! is never confused with a sequence index. The dotted-bracket string form
//! (`product.category[0].name`) is only produced when a path is rendered.

use std::fmt;

/// One structural step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Map-key lookup, rendered as `.name` (bare `name` at the root).
    Field(String),
    /// Sequence-position lookup, rendered as `[i]`.
    Index(usize),
}

/// A path from the document root to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    steps: Vec<Step>,
}

impl KeyPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path extended by a field step.
    pub fn field(&self, name: impl Into<String>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step::Field(name.into()));
        Self { steps }
    }

    /// Returns a new path extended by an index step.
    pub fn index(&self, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step::Index(index));
        Self { steps }
    }

    /// Tokenizes a rendered path the way it has always been read back:
    /// `[` becomes `.`, `]` is dropped, the result is split on `.`, and any
    /// token made only of ASCII digits is taken as an index.
    ///
    /// A digit-only field name (`{"123": ..}`) therefore comes back as an
    /// index step. Paths built through [`KeyPath::field`] keep the distinction.
    pub fn parse_lossy(path: &str) -> Self {
        let normalized = path.replace('[', ".").replace(']', "");
        let steps = normalized
            .split('.')
            .map(|token| {
                if is_index_token(token) {
                    // Too large for any sequence, so it must still miss.
                    Step::Index(token.parse().unwrap_or(usize::MAX))
                } else {
                    Step::Field(token.to_string())
                }
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

fn is_index_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Field(name) if i == 0 => write!(f, "{}", name)?,
                Step::Field(name) => write!(f, ".{}", name)?,
                Step::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
