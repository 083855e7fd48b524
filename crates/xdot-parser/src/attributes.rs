//! Attribute maps attached to graph, node and edge statements.

use indexmap::IndexMap;

use crate::span::Span;

/// An attribute value with the span of the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    value: String,
    span: Span,
}

impl Attribute {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source span of the value, or of the name for valueless attributes.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// An ordered map of attribute names to values.
///
/// Inserting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, attribute: Attribute) {
        self.entries.insert(name.into(), attribute);
    }

    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(Attribute::value)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Copies every entry of `other` into this map, overriding existing names.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, attribute) in &other.entries {
            self.entries.insert(name.clone(), attribute.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.entries
            .iter()
            .map(|(name, attribute)| (name.as_str(), attribute))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
