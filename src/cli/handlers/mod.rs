mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::config::ShopConfig;
use crate::storage::{Backend, MemorySource, RestSource};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ShopConfig,
}

impl CommandContext {
    pub fn new(config: ShopConfig) -> Self {
        Self { config }
    }

    /// Data sources for this run: a fixture when given, otherwise the
    /// configured REST backend.
    pub fn backend(&self, fixture: Option<&Path>) -> Result<Backend> {
        if let Some(path) = fixture {
            let source = MemorySource::load(path)
                .with_context(|| format!("Failed to load fixture {}", path.display()))?;
            info!(fixture = %path.display(), "using in-memory tables");
            return Ok(Backend::shared(Arc::new(source)));
        }

        let Some(backend) = &self.config.backend else {
            bail!("No backend configured. Set SUPABASE_URL and SUPABASE_ANON_KEY, or pass --fixture");
        };

        let public = RestSource::new(&backend.url, &backend.anon_key)?;
        let service = match &backend.service_key {
            Some(key) => RestSource::new(&backend.url, key)?,
            None => {
                warn!("SUPABASE_SERVICE_ROLE_KEY not set, user reads and inserts use the anon key");
                public.clone()
            }
        };
        Ok(Backend::new(Arc::new(public), Arc::new(service)))
    }
}

fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}
