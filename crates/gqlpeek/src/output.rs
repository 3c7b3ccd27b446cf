use serde::Serialize;
use std::io::IsTerminal;
use tabled::{Table, Tabled};

/// How records and request previews are printed: cat cards and student
/// tables for people, JSON for pipes and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Human,
    Json,
}

/// `--format` wins; otherwise human when stdout is a terminal, JSON when piped.
pub fn resolve_format(format: Option<Format>) -> Format {
    match format {
        Some(f) => f,
        None => {
            if std::io::stdout().is_terminal() {
                Format::Human
            } else {
                Format::Json
            }
        }
    }
}

/// Print catalog rows such as `gqlpeek fields` output.
pub fn print_table<T: Serialize + Tabled>(items: &[T], format: Format) {
    match format {
        Format::Json => print_json(&items),
        Format::Human => {
            if items.is_empty() {
                println!("No results.");
                return;
            }
            println!("{}", Table::new(items));
        }
    }
}

/// Pretty-print records or a preview as JSON.
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
}
