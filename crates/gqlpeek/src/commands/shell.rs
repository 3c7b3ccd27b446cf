//! Line-oriented interactive session.
//!
//! Edits change only the pending inputs; `preview` reflects them at once,
//! while `show` keeps displaying the applied result until a `run` succeeds.

use clap::Args;
use colored::Colorize;
use gqlpeek_sdk::config::Config;
use gqlpeek_sdk::{Section, Session, Transport};
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{
    cat_transport, known_field, print_preview, print_results, student_transport, CatTransport,
    SectionArg, StudentTransport,
};
use crate::output::Format;
use crate::render;

/// Start an interactive session.
#[derive(Debug, Args)]
pub struct ShellCmd {
    #[arg(value_enum)]
    pub section: SectionArg,
    /// Transport for cat queries.
    #[arg(long, value_enum, default_value_t = CatTransport::Rest)]
    pub cat_transport: CatTransport,
    /// Transport for student queries.
    #[arg(long, value_enum, default_value_t = StudentTransport::Local)]
    pub student_transport: StudentTransport,
}

const HELP: &str = "\
commands:
  fields               list fields ([x] = pending selection)
  on <field>           select a field
  off <field>          deselect a field
  toggle <field>       flip a field
  limit <n>            number of cat images (1-20)
  breed [id]           filter cats by breed; no id clears it
  preview              print the request the pending inputs would send
  run                  send the query
  show                 print the last applied result
  state                print pending and applied inputs
  help                 this text
  quit                 leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Fields,
    On(String),
    Off(String),
    Toggle(String),
    Limit(String),
    Breed(String),
    Preview,
    Run,
    Show,
    State,
    Help,
    Quit,
    Empty,
}

fn parse_line(input: &str) -> anyhow::Result<Line> {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    let arg = |name: &str| {
        if rest.is_empty() {
            Err(anyhow::anyhow!("'{}' needs an argument", name))
        } else {
            Ok(rest.to_string())
        }
    };
    Ok(match word {
        "" => Line::Empty,
        "fields" => Line::Fields,
        "on" => Line::On(arg("on")?),
        "off" => Line::Off(arg("off")?),
        "toggle" => Line::Toggle(arg("toggle")?),
        "limit" => Line::Limit(arg("limit")?),
        "breed" => Line::Breed(rest.to_string()),
        "preview" => Line::Preview,
        "run" => Line::Run,
        "show" => Line::Show,
        "state" => Line::State,
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => return Err(anyhow::anyhow!("Unknown command '{}' (try 'help')", other)),
    })
}

pub async fn run(cmd: ShellCmd, config: &Config, format: Format) -> anyhow::Result<()> {
    let section: Section = cmd.section.into();
    let transport = match section {
        Section::Cats => cat_transport(cmd.cat_transport, config)?,
        Section::Students => student_transport(cmd.student_transport, config)?,
    };
    let mut session = Session::new(section);
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            eprint!("gqlpeek:{}> ", section.name());
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if parsed == Line::Quit {
            break;
        }
        if let Err(e) = step(&mut session, transport.as_ref(), parsed, format).await {
            eprintln!("{}", e);
        }
    }
    Ok(())
}

async fn step(
    session: &mut Session,
    transport: &dyn Transport,
    line: Line,
    format: Format,
) -> anyhow::Result<()> {
    let section = session.section();
    match line {
        Line::Empty | Line::Quit => {}
        Line::Help => println!("{}", HELP),
        Line::Fields => {
            for field in section.fields() {
                let mark = if session.pending().fields.contains(field.key) {
                    "[x]"
                } else {
                    "[ ]"
                };
                println!("{} {:<12} {}", mark, field.key, field.label);
            }
        }
        Line::On(key) => {
            known_field(section, &key)?;
            session.set_field(key, true);
        }
        Line::Off(key) => {
            known_field(section, &key)?;
            session.set_field(key, false);
        }
        Line::Toggle(key) => {
            known_field(section, &key)?;
            let selected = session.toggle_field(key.as_str());
            println!("{} {}", key, if selected { "on" } else { "off" });
        }
        Line::Limit(raw) => {
            require_arguments(section)?;
            session.set_limit(raw);
        }
        Line::Breed(raw) => {
            require_arguments(section)?;
            session.set_breed(raw);
        }
        Line::Preview => print_preview(session, transport),
        Line::Run => {
            eprintln!("{}", render::LOADING.dimmed());
            session.execute(transport).await;
            show(session, format);
        }
        Line::Show => show(session, format),
        Line::State => print_state(session),
    }
    Ok(())
}

fn require_arguments(section: Section) -> anyhow::Result<()> {
    if section.has_arguments() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{} queries take no arguments", section.name()))
    }
}

fn show(session: &Session, format: Format) {
    for line in render::status_lines(session) {
        eprintln!("{}", line);
    }
    print_results(session, format);
}

fn print_state(session: &Session) {
    let describe = |inputs: &gqlpeek_sdk::QueryInputs| {
        let fields: Vec<&str> = inputs.fields.keys().iter().map(|k| k.as_str()).collect();
        let mut text = format!("fields=[{}]", fields.join(","));
        if session.section().has_arguments() {
            text.push_str(&format!(" limit={} breed={}", inputs.limit, inputs.breed.trim()));
        }
        text
    };
    println!("phase: {:?}", session.phase());
    println!("pending: {}", describe(session.pending()));
    println!("applied: {}", describe(session.applied()));
}
