use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};

pub fn handle_serve(
    mut ctx: CommandContext,
    port: Option<u16>,
    host: Option<IpAddr>,
    fixture: Option<PathBuf>,
    no_graphiql: bool,
) -> Result<()> {
    if let Some(port) = port {
        ctx.config.port = port;
    }
    if let Some(host) = host {
        ctx.config.host = host;
    }
    if no_graphiql {
        ctx.config.graphiql = false;
    }

    let schema = build_schema(ctx.backend(fixture.as_deref())?);
    let addr = ctx.config.addr();

    println!(
        "{} on http://{}{}",
        "GraphQL server".green(),
        addr,
        GRAPHQL_PATH
    );
    if ctx.config.graphiql {
        println!("GraphiQL console: http://{}{}", addr, GRAPHQL_PATH);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, addr, ctx.config.graphiql))?;
    Ok(())
}
