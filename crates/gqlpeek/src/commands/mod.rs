pub mod cats;
pub mod fields;
pub mod shell;
pub mod students;

use gqlpeek_sdk::config::Config;
use gqlpeek_sdk::{
    GraphQLTransport, LocalSchemaTransport, Phase, RestTransport, Section, Session, Transport,
};

use crate::output::{self, Format};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SectionArg {
    Cats,
    Students,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Cats => Section::Cats,
            SectionArg::Students => Section::Students,
        }
    }
}

/// Where cat queries go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CatTransport {
    /// The Cat API through the REST adapter.
    #[default]
    Rest,
    /// A remote GraphQL endpoint serving `catImages`.
    Graphql,
}

/// Where student queries go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StudentTransport {
    /// The in-process schema over the built-in dataset.
    #[default]
    Local,
    /// A remote GraphQL endpoint serving `students`.
    Graphql,
}

pub fn cat_transport(choice: CatTransport, config: &Config) -> anyhow::Result<Box<dyn Transport>> {
    Ok(match choice {
        CatTransport::Rest => Box::new(RestTransport::new(
            config.cat_api_url.clone(),
            config.cat_api_key.clone(),
        )),
        CatTransport::Graphql => Box::new(GraphQLTransport::new(config.graphql_url()?)),
    })
}

pub fn student_transport(
    choice: StudentTransport,
    config: &Config,
) -> anyhow::Result<Box<dyn Transport>> {
    Ok(match choice {
        StudentTransport::Local => Box::new(LocalSchemaTransport::seeded()),
        StudentTransport::Graphql => Box::new(GraphQLTransport::new(config.graphql_url()?)),
    })
}

/// Check a field name against the section's catalog.
pub fn known_field(section: Section, key: &str) -> anyhow::Result<()> {
    if section.is_known_field(key) {
        return Ok(());
    }
    let known: Vec<&str> = section.fields().iter().map(|f| f.key).collect();
    Err(anyhow::anyhow!(
        "Unknown {} field '{}' (known: {})",
        section.name(),
        key,
        known.join(", ")
    ))
}

/// Print the request the session's pending inputs would send.
pub fn print_preview(session: &Session, transport: &dyn Transport) {
    println!("{}", transport.preview(&session.pending_query()).to_pretty_json());
}

/// Execute the pending inputs once and print the applied result.
pub async fn execute_and_print(
    session: &mut Session,
    transport: &dyn Transport,
    format: Format,
) -> anyhow::Result<()> {
    if session.execute(transport).await == Phase::Failed {
        return Err(anyhow::anyhow!("{}", session.error().unwrap_or("query failed")));
    }
    print_results(session, format);
    Ok(())
}

/// Print the applied records of a session.
pub fn print_results(session: &Session, format: Format) {
    match format {
        Format::Json => output::print_json(session.records()),
        Format::Human => println!("{}", render::session_results(session)),
    }
}
