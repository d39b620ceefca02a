//! Service configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first when present.
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `4000` | listen port |
//! | `SUPABASE_URL` | none | project URL of the REST backend |
//! | `SUPABASE_ANON_KEY` | none | public key, required with `SUPABASE_URL` |
//! | `SUPABASE_SERVICE_ROLE_KEY` | anon key | privileged key for users and inserts |
//! | `SHOPGRAPH_GRAPHIQL` | `true` | serve the GraphiQL console |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;

use crate::error::{Result, ShopError};

pub const DEFAULT_PORT: u16 = 4000;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub host: IpAddr,
    pub port: u16,
    pub graphiql: bool,
    /// Remote backend. `None` when `SUPABASE_URL` is unset.
    pub backend: Option<BackendConfig>,
}

/// Connection settings for the remote table backend.
///
/// `SecretString` keeps the keys out of `Debug` output.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: SecretString,
    pub service_key: Option<SecretString>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            graphiql: true,
            backend: None,
        }
    }
}

impl ShopConfig {
    /// Read the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = var("HOST") {
            config.host = host
                .parse()
                .map_err(|_| ShopError::Config(format!("HOST is not an IP address: {}", host)))?;
        }
        if let Some(port) = var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ShopError::Config(format!("PORT is not a valid port: {}", port)))?;
        }
        if let Some(flag) = var("SHOPGRAPH_GRAPHIQL") {
            config.graphiql = parse_flag("SHOPGRAPH_GRAPHIQL", &flag)?;
        }

        if let Some(url) = var("SUPABASE_URL") {
            let anon_key = var("SUPABASE_ANON_KEY").ok_or_else(|| {
                ShopError::Config("SUPABASE_ANON_KEY is required when SUPABASE_URL is set".to_string())
            })?;
            config.backend = Some(BackendConfig {
                url,
                anon_key: SecretString::from(anon_key),
                service_key: var("SUPABASE_SERVICE_ROLE_KEY").map(SecretString::from),
            });
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ShopError::Config(format!(
            "{} must be true or false, got {}",
            key, other
        ))),
    }
}
