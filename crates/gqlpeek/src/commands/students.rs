use clap::Args;
use gqlpeek_sdk::config::Config;
use gqlpeek_sdk::selection::STUDENT_FIELDS;
use gqlpeek_sdk::{Section, Session};

use super::{execute_and_print, print_preview, student_transport, StudentTransport};
use crate::output::Format;

/// Query students.
#[derive(Debug, Args)]
pub struct StudentsCmd {
    #[command(subcommand)]
    pub action: StudentsAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum StudentsAction {
    /// Print the GraphQL request body `run` would send.
    ///
    /// Examples:
    ///   gqlpeek students preview --fields name,email
    Preview(StudentQueryArgs),
    /// Run the query and print the students table.
    ///
    /// Examples:
    ///   gqlpeek students run
    ///   gqlpeek students run -f id,name,age --transport graphql
    Run(StudentQueryArgs),
}

#[derive(Debug, Args)]
pub struct StudentQueryArgs {
    /// Columns to request, comma-separated. Defaults to id,name,program,gpa.
    #[arg(
        long,
        short = 'f',
        value_delimiter = ',',
        value_parser = clap::builder::PossibleValuesParser::new(STUDENT_FIELDS.iter().map(|f| f.key))
    )]
    pub fields: Option<Vec<String>>,
    /// Where to send the query.
    #[arg(long, value_enum, default_value_t = StudentTransport::Local)]
    pub transport: StudentTransport,
}

pub async fn run(cmd: StudentsCmd, config: &Config, format: Format) -> anyhow::Result<()> {
    let (args, execute) = match cmd.action {
        StudentsAction::Preview(args) => (args, false),
        StudentsAction::Run(args) => (args, true),
    };
    let transport = student_transport(args.transport, config)?;
    let mut session = Session::new(Section::Students);
    if let Some(fields) = &args.fields {
        let mut inputs = session.pending().clone();
        inputs.fields = fields.iter().map(String::as_str).collect();
        session.replace_pending(inputs);
    }

    if execute {
        execute_and_print(&mut session, transport.as_ref(), format).await
    } else {
        print_preview(&session, transport.as_ref());
        Ok(())
    }
}
