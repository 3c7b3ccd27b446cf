//! User-driven GraphQL field selection.
//!
//! A [`SelectionSet`] is the ordered list of field keys the user asked for.
//! [`compile_selection`] turns it into the body of a GraphQL selection set,
//! expanding the object-typed fields into `{ id name }` sub-selections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields whose values are lists of `{ id name }` objects.
const NESTED_FIELDS: [&str; 2] = ["breeds", "categories"];

/// Selected when nothing else is, so every query has at least one field.
pub const DEFAULT_FIELD: &str = "id";

/// Name of a requestable output attribute, e.g. `id`, `url`, `breeds`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key expands into a `{ id name }` sub-selection.
    pub fn is_nested(&self) -> bool {
        NESTED_FIELDS.contains(&self.0.as_str())
    }

    /// The GraphQL fragment requesting this field.
    pub fn fragment(&self) -> String {
        if self.is_nested() {
            format!("{} {{ id name }}", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl PartialEq<str> for FieldKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Compile field keys into a newline-joined GraphQL selection.
///
/// Duplicates are kept as given; [`SelectionSet`] already prevents them.
/// An empty input compiles to [`DEFAULT_FIELD`].
pub fn compile_selection(fields: &[FieldKey]) -> String {
    if fields.is_empty() {
        return DEFAULT_FIELD.to_string();
    }
    fields
        .iter()
        .map(FieldKey::fragment)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered set of selected field keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<FieldKey>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a field on or off. Turning on appends it unless it is already
    /// selected; turning off removes it wherever it is.
    pub fn set(&mut self, key: impl Into<FieldKey>, selected: bool) {
        let key = key.into();
        if selected {
            if !self.0.contains(&key) {
                self.0.push(key);
            }
        } else {
            self.0.retain(|k| *k != key);
        }
    }

    /// Flip a field and return whether it is now selected.
    pub fn toggle(&mut self, key: impl Into<FieldKey>) -> bool {
        let key = key.into();
        let now_selected = !self.contains(key.as_str());
        self.set(key, now_selected);
        now_selected
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[FieldKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn compile(&self) -> String {
        compile_selection(&self.0)
    }
}

impl<K: Into<FieldKey>> FromIterator<K> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.set(key, true);
        }
        set
    }
}

/// A selectable field with its human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
}

pub const CAT_FIELDS: &[FieldDef] = &[
    FieldDef { key: "id", label: "id" },
    FieldDef { key: "url", label: "url (image)" },
    FieldDef { key: "width", label: "width" },
    FieldDef { key: "height", label: "height" },
    FieldDef { key: "breeds", label: "breeds { name }" },
    FieldDef { key: "categories", label: "categories { name }" },
];

pub const STUDENT_FIELDS: &[FieldDef] = &[
    FieldDef { key: "id", label: "id" },
    FieldDef { key: "name", label: "name" },
    FieldDef { key: "age", label: "age" },
    FieldDef { key: "program", label: "program" },
    FieldDef { key: "gpa", label: "gpa" },
    FieldDef { key: "email", label: "email" },
];
