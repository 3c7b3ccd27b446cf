use clap::Args;
use gqlpeek_sdk::config::Config;
use gqlpeek_sdk::query::DEFAULT_LIMIT;
use gqlpeek_sdk::selection::CAT_FIELDS;
use gqlpeek_sdk::{QueryInputs, Section, Session};

use super::{cat_transport, execute_and_print, print_preview, CatTransport};
use crate::output::Format;

/// Query cat images.
#[derive(Debug, Args)]
pub struct CatsCmd {
    #[command(subcommand)]
    pub action: CatsAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum CatsAction {
    /// Print the request that `run` would send, without sending it.
    ///
    /// Examples:
    ///   gqlpeek cats preview --fields id,url,breeds --limit 5
    ///   gqlpeek cats preview --transport graphql --breed abys
    Preview(CatQueryArgs),
    /// Send the query and print the cat images.
    ///
    /// Examples:
    ///   gqlpeek cats run
    ///   gqlpeek cats run -f url,breeds -l 10 -b beng
    Run(CatQueryArgs),
}

#[derive(Debug, Args)]
pub struct CatQueryArgs {
    /// Fields to request, comma-separated. Defaults to id,url.
    #[arg(
        long,
        short = 'f',
        value_delimiter = ',',
        value_parser = clap::builder::PossibleValuesParser::new(CAT_FIELDS.iter().map(|f| f.key))
    )]
    pub fields: Option<Vec<String>>,
    /// Number of images (clamped to 1..=20; anything non-numeric means 1).
    #[arg(long, short = 'l', default_value = DEFAULT_LIMIT, allow_hyphen_values = true)]
    pub limit: String,
    /// Only images of this breed (e.g. abys).
    #[arg(long, short = 'b')]
    pub breed: Option<String>,
    /// Where to send the query.
    #[arg(long, value_enum, default_value_t = CatTransport::Rest)]
    pub transport: CatTransport,
}

impl CatQueryArgs {
    fn inputs(&self) -> QueryInputs {
        let mut inputs = Section::Cats.default_inputs();
        if let Some(fields) = &self.fields {
            inputs.fields = fields.iter().map(String::as_str).collect();
        }
        inputs.limit = self.limit.clone();
        inputs.breed = self.breed.clone().unwrap_or_default();
        inputs
    }
}

pub async fn run(cmd: CatsCmd, config: &Config, format: Format) -> anyhow::Result<()> {
    let (args, execute) = match cmd.action {
        CatsAction::Preview(args) => (args, false),
        CatsAction::Run(args) => (args, true),
    };
    let transport = cat_transport(args.transport, config)?;
    let mut session = Session::new(Section::Cats);
    session.replace_pending(args.inputs());

    if execute {
        execute_and_print(&mut session, transport.as_ref(), format).await
    } else {
        print_preview(&session, transport.as_ref());
        Ok(())
    }
}
