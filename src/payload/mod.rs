//! Provider payloads as untyped JSON trees, and the text pulled out of them.
//!
//! Provider exports are loosely shaped and frequently partial, so every
//! lookup goes through [`Cursor`], which carries "nothing here" forward
//! instead of failing. A missing key anywhere along a path simply produces no
//! text for that segment.

pub mod sample;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

/// A position in a payload tree that may not exist.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a>(Option<&'a Value>);

impl<'a> Cursor<'a> {
    pub fn new(root: &'a Value) -> Self {
        Cursor(Some(root))
    }

    /// Step into a mapping key. Non-mappings and missing keys yield an empty cursor.
    pub fn get(self, key: &str) -> Self {
        Cursor(self.0.and_then(|v| v.get(key)))
    }

    /// Follow a sequence of mapping keys.
    pub fn path(self, keys: &[&str]) -> Self {
        keys.iter().fold(self, |cursor, key| cursor.get(key))
    }

    /// Every element of a sequence, in source order. Anything else yields nothing.
    pub fn items(self) -> impl Iterator<Item = Cursor<'a>> {
        self.0
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|v| Cursor(Some(v)))
    }

    pub fn exists(self) -> bool {
        self.0.is_some_and(|v| !v.is_null())
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    /// True when this is a string equal to `expected`.
    pub fn is(self, expected: &str) -> bool {
        self.as_str() == Some(expected)
    }

    /// Scalar coerced to text; `None` when absent, empty, null or not a scalar.
    pub fn text(self) -> Option<String> {
        let text = match self.0? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Numeric value; numeric strings such as `"1250"` are accepted too.
    pub fn number(self) -> Option<f64> {
        match self.0? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Ordered text fragments extracted for one analysis unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextCorpus {
    fragments: Vec<String>,
}

impl TextCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment if there is one.
    pub fn push(&mut self, fragment: Option<String>) {
        if let Some(fragment) = fragment {
            self.fragments.push(fragment);
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments joined with single spaces, as handed to the classifier.
    pub fn joined(&self) -> String {
        self.fragments.join(" ")
    }
}

/// A named slice of a payload, e.g. a profile or a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: &'static str,
    pub corpus: TextCorpus,
}

impl Segment {
    pub fn new(name: &'static str) -> Self {
        Segment {
            name,
            corpus: TextCorpus::new(),
        }
    }
}

/// Flatten segments into `(segment name, fragment)` pairs, preserving order.
pub fn fragments(segments: &[Segment]) -> Vec<(&'static str, &str)> {
    segments
        .iter()
        .flat_map(|s| s.corpus.fragments().iter().map(move |f| (s.name, f.as_str())))
        .collect()
}

/// Read a payload export from disk.
pub fn load(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading payload {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing payload {}", path.display()))
}

/// Like [`load`], but an unreadable or malformed file is logged and treated as an empty payload.
pub fn load_or_empty(path: &Path) -> Value {
    load(path).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "unreadable payload, analyzing as empty");
        Value::Null
    })
}
