use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shopgraph")]
#[command(
    author,
    version,
    about = "A GraphQL endpoint over a remote e-commerce table backend"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on [env: PORT, default 4000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind [env: HOST, default 0.0.0.0]
        #[arg(long)]
        host: Option<IpAddr>,

        /// Serve in-memory tables from a JSON fixture instead of the remote backend
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Do not serve the GraphiQL console
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Run against in-memory tables from a JSON fixture
        #[arg(long)]
        fixture: Option<PathBuf>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Run against in-memory tables from a JSON fixture
        #[arg(long)]
        fixture: Option<PathBuf>,
    },

    /// Print the schema in SDL form
    Schema,
}
