use std::path::PathBuf;

use anyhow::Result;

use super::CommandContext;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    fixture: Option<PathBuf>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    super::handle_query(ctx, query, variables, fixture)
}
