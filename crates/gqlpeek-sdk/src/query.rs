//! Query document and variable building.
//!
//! Building is pure and cheap: callers rebuild on every edit to refresh the
//! request preview, and only an explicit execution sends anything.

use crate::selection::{FieldKey, SelectionSet};
use serde::{Deserialize, Serialize};

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 20;
pub const DEFAULT_LIMIT: &str = "3";

/// Normalize a user-supplied limit into `[MIN_LIMIT, MAX_LIMIT]`.
///
/// Anything that is not a number (and zero) becomes 1. Fractions are
/// truncated after clamping. Accepted spellings are decimal and exponent
/// forms, `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
pub fn normalize_limit(raw: &str) -> i64 {
    parse_number(raw.trim()).map_or(MIN_LIMIT, clamp_limit)
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let numeric = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if numeric {
        s.parse().ok()
    } else {
        None
    }
}

/// Numeric counterpart of [`normalize_limit`].
pub fn clamp_limit(n: f64) -> i64 {
    if n.is_nan() || n == 0.0 {
        return MIN_LIMIT;
    }
    n.clamp(MIN_LIMIT as f64, MAX_LIMIT as f64).trunc() as i64
}

/// The breed identifier to send, if any. Blank input counts as absent.
pub fn breed_id(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Variables of the cat images query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatVariables {
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_id: Option<String>,
}

/// A complete query ready to preview or execute.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub operation_name: String,
    /// Top-level field whose value holds the records, e.g. `catImages`.
    pub root_field: String,
    pub query: String,
    pub variables: serde_json::Value,
    pub selected_fields: Vec<FieldKey>,
}

impl BuiltQuery {
    /// The cat variables, when this is a cat query.
    pub fn cat_variables(&self) -> Option<CatVariables> {
        serde_json::from_value(self.variables.clone()).ok()
    }
}

/// Build the cat images query. The template declares `$breedId` only when a
/// breed identifier is present.
pub fn build_cat_query(selection: &SelectionSet, raw_limit: &str, raw_breed: &str) -> BuiltQuery {
    let fields = indent(&selection.compile(), "    ");
    let variables = CatVariables {
        limit: normalize_limit(raw_limit),
        breed_id: breed_id(raw_breed).map(str::to_string),
    };
    let query = if variables.breed_id.is_some() {
        format!(
            "query CatImages($limit: Int!, $breedId: String) {{\n  catImages(limit: $limit, breedId: $breedId) {{\n{}\n  }}\n}}",
            fields
        )
    } else {
        format!(
            "query CatImages($limit: Int!) {{\n  catImages(limit: $limit) {{\n{}\n  }}\n}}",
            fields
        )
    };

    BuiltQuery {
        operation_name: "CatImages".to_string(),
        root_field: "catImages".to_string(),
        query,
        variables: serde_json::to_value(&variables).unwrap_or_default(),
        selected_fields: selection.keys().to_vec(),
    }
}

/// Build the students query. It takes no arguments.
pub fn build_students_query(selection: &SelectionSet) -> BuiltQuery {
    let fields = indent(&selection.compile(), "    ");
    BuiltQuery {
        operation_name: "AllStudents".to_string(),
        root_field: "students".to_string(),
        query: format!("query AllStudents {{\n  students {{\n{}\n  }}\n}}", fields),
        variables: serde_json::json!({}),
        selected_fields: selection.keys().to_vec(),
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Which dataset a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cats,
    Students,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cats => "cats",
            Self::Students => "students",
        }
    }

    pub fn fields(self) -> &'static [crate::selection::FieldDef] {
        match self {
            Self::Cats => crate::selection::CAT_FIELDS,
            Self::Students => crate::selection::STUDENT_FIELDS,
        }
    }

    pub fn default_fields(self) -> &'static [&'static str] {
        match self {
            Self::Cats => &["id", "url"],
            Self::Students => &["id", "name", "program", "gpa"],
        }
    }

    /// Whether the section takes a limit and a breed identifier.
    pub fn has_arguments(self) -> bool {
        matches!(self, Self::Cats)
    }

    pub fn is_known_field(self, key: &str) -> bool {
        self.fields().iter().any(|f| f.key == key)
    }

    /// The inputs a fresh session starts from.
    pub fn default_inputs(self) -> QueryInputs {
        QueryInputs {
            fields: self.default_fields().iter().copied().collect(),
            limit: DEFAULT_LIMIT.to_string(),
            breed: String::new(),
        }
    }

    pub fn build(self, inputs: &QueryInputs) -> BuiltQuery {
        match self {
            Self::Cats => build_cat_query(&inputs.fields, &inputs.limit, &inputs.breed),
            Self::Students => build_students_query(&inputs.fields),
        }
    }
}

/// Everything a user can edit before executing: the selection plus the raw,
/// unnormalized limit and breed identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInputs {
    pub fields: SelectionSet,
    pub limit: String,
    pub breed: String,
}
