mod commands;
mod logging;
mod output;
mod render;

use clap::{builder::TypedValueParser, Parser, Subcommand};
use gqlpeek_sdk::config::{Config, Overrides};

/// gqlpeek: pick GraphQL fields, preview the request, run the query
#[derive(Debug, Parser)]
#[command(name = "gqlpeek", version, about)]
struct Cli {
    /// Base URL of The Cat API (overrides $CAT_API_URL).
    #[arg(long, global = true)]
    cat_api_url: Option<String>,

    /// Cat API key (overrides $CAT_API_KEY and ~/.cat_api_key).
    #[arg(long, global = true)]
    cat_api_key: Option<String>,

    /// Remote GraphQL endpoint (overrides $GQLPEEK_GRAPHQL_URL).
    #[arg(long, global = true)]
    graphql_url: Option<String>,

    /// Output format. Auto-detected if not specified (human for terminal, json for pipe).
    #[arg(long, global = true)]
    format: Option<output::Format>,

    /// Log level for diagnostics on stderr. Silent by default.
    #[arg(
        long,
        global = true,
        value_parser = clap::builder::PossibleValuesParser::new(logging::LEVELS)
            .try_map(|s| s.parse::<tracing::Level>())
    )]
    log_level: Option<tracing::Level>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the selectable fields of a section.
    Fields {
        #[arg(value_enum)]
        section: commands::SectionArg,
    },
    /// Query cat images (The Cat API through the REST adapter, or GraphQL).
    Cats(commands::cats::CatsCmd),
    /// Query students (local schema, or GraphQL).
    Students(commands::students::StudentsCmd),
    /// Interactive session: edit fields, preview and run on demand.
    Shell(commands::shell::ShellCmd),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    let format = output::resolve_format(cli.format);

    let config = match Config::resolve(Overrides {
        cat_api_url: cli.cat_api_url,
        cat_api_key: cli.cat_api_key,
        graphql_url: cli.graphql_url,
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Fields { section } => commands::fields::run(section.into(), format),
        Command::Cats(cmd) => commands::cats::run(cmd, &config, format).await,
        Command::Students(cmd) => commands::students::run(cmd, &config, format).await,
        Command::Shell(cmd) => commands::shell::run(cmd, &config, format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
