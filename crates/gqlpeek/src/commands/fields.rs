use gqlpeek_sdk::Section;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, Format};

#[derive(Debug, Serialize, Tabled)]
pub struct FieldRow {
    pub key: &'static str,
    pub label: &'static str,
    pub default: bool,
}

pub fn rows(section: Section) -> Vec<FieldRow> {
    let defaults = section.default_fields();
    section
        .fields()
        .iter()
        .map(|f| FieldRow {
            key: f.key,
            label: f.label,
            default: defaults.contains(&f.key),
        })
        .collect()
}

pub fn run(section: Section, format: Format) -> anyhow::Result<()> {
    output::print_table(&rows(section), format);
    Ok(())
}
