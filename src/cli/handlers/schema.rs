use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::{Backend, MemorySource};

pub fn handle_schema() -> Result<()> {
    // SDL generation never touches the data source.
    let schema = build_schema(Backend::shared(Arc::new(MemorySource::new())));
    print!("{}", schema.sdl());
    Ok(())
}
