//! Human rendering of query results.
//!
//! Only applied fields are shown: cat records become text cards, student
//! records a table with one column per field in selection order.

use colored::Colorize;
use gqlpeek_sdk::records::{joined_names, CatImage};
use gqlpeek_sdk::{FieldKey, Section, Session};
use serde_json::Value;
use tabled::builder::Builder;

pub const EMPTY: &str = "No results yet.";
pub const LOADING: &str = "Querying…";

/// Render the records of `section` for the given fields.
pub fn results(section: Section, records: &[Value], fields: &[FieldKey]) -> String {
    if records.is_empty() {
        return EMPTY.to_string();
    }
    match section {
        Section::Cats => cat_cards(records, fields),
        Section::Students => student_table(records, fields),
    }
}

/// Render what a session currently shows: its applied records.
pub fn session_results(session: &Session) -> String {
    results(session.section(), session.records(), session.applied_fields())
}

/// Loading and error lines for a session, if any.
pub fn status_lines(session: &Session) -> Vec<String> {
    let mut lines = Vec::new();
    if session.is_loading() {
        lines.push(LOADING.dimmed().to_string());
    }
    if let Some(err) = session.error() {
        lines.push(format!("Error: {}", err).red().to_string());
    }
    lines
}

pub fn cat_cards(records: &[Value], fields: &[FieldKey]) -> String {
    let has = |key: &str| fields.iter().any(|f| f == key);
    let mut cards = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let cat = CatImage::from_value(record);
        let mut lines = Vec::new();

        match cat.url.as_deref() {
            Some(url) if has("url") => lines.push(format!("[{}] {}", i + 1, url)),
            _ => lines.push(format!("[{}] (image not selected)", i + 1)),
        }
        if let Some(id) = cat.id.as_deref().filter(|id| has("id") && !id.is_empty()) {
            lines.push(format!("    ID: {}", id));
        }
        if let Some(width) = cat.width.filter(|_| has("width")) {
            lines.push(format!("    Width: {}", width));
        }
        if let Some(height) = cat.height.filter(|_| has("height")) {
            lines.push(format!("    Height: {}", height));
        }
        if let Some(breeds) = cat.breeds.as_deref().filter(|b| has("breeds") && !b.is_empty()) {
            lines.push(format!("    Breeds: {}", joined_names(breeds)));
        }
        if let Some(categories) = cat
            .categories
            .as_deref()
            .filter(|c| has("categories") && !c.is_empty())
        {
            lines.push(format!("    Categories: {}", joined_names(categories)));
        }
        cards.push(lines.join("\n"));
    }
    cards.join("\n\n")
}

pub fn student_table(records: &[Value], fields: &[FieldKey]) -> String {
    let mut builder = Builder::default();
    builder.push_record(fields.iter().map(|f| capitalize(f.as_str())));
    for record in records {
        builder.push_record(fields.iter().map(|f| cell_text(record.get(f.as_str()))));
    }
    builder.build().to_string()
}

/// Text of one table cell: strings as they are, missing or null values
/// empty, objects and lists as JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
