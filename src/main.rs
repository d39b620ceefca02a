use anyhow::{Context, Result};
use clap::Parser;

use shopgraph::cli::handlers::{self, CommandContext};
use shopgraph::cli::{Cli, Commands};
use shopgraph::config::ShopConfig;
use shopgraph::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Schema => handlers::handle_schema(),
        Commands::Serve {
            port,
            host,
            fixture,
            no_graphiql,
        } => handlers::handle_serve(load_context()?, port, host, fixture, no_graphiql),
        Commands::Query {
            query,
            variables,
            fixture,
        } => handlers::handle_query(load_context()?, query, variables, fixture),
        Commands::Mutate {
            mutation,
            variables,
            fixture,
        } => handlers::handle_mutate(load_context()?, mutation, variables, fixture),
    }
}

fn load_context() -> Result<CommandContext> {
    let config = ShopConfig::from_env().context("Failed to load configuration")?;
    Ok(CommandContext::new(config))
}
