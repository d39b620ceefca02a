use std::path::PathBuf;

use anyhow::Result;

use super::{CommandContext, parse_variables};
use crate::graphql::build_schema;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    fixture: Option<PathBuf>,
) -> Result<()> {
    let schema = build_schema(ctx.backend(fixture.as_deref())?);
    let request = async_graphql::Request::new(query).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
