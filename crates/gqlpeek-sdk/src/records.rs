//! Typed views over returned records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An `{ id name }` object, as found in `breeds` and `categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
}

/// One cat image record. Every field is optional since only the selected
/// fields come back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub breeds: Option<Vec<NamedRef>>,
    pub categories: Option<Vec<NamedRef>>,
}

impl CatImage {
    /// Read a record field by field. A field of an unexpected type is treated
    /// as absent without affecting the others; whole-number floats such as
    /// `640.0` count as integers.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: value.get("id").and_then(scalar_text),
            url: value.get("url").and_then(Value::as_str).map(str::to_string),
            width: value.get("width").and_then(integer),
            height: value.get("height").and_then(integer),
            breeds: value.get("breeds").and_then(named_list),
            categories: value.get("categories").and_then(named_list),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn named_list(value: &Value) -> Option<Vec<NamedRef>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter(|item| item.is_object())
            .map(|item| NamedRef {
                id: item.get("id").filter(|id| !id.is_null()).cloned(),
                name: item.get("name").and_then(Value::as_str).map(str::to_string),
            })
            .collect(),
    )
}

/// Join the names of a `{ id name }` list, skipping entries without one.
pub fn joined_names(refs: &[NamedRef]) -> String {
    refs.iter()
        .filter_map(|r| r.name.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}
