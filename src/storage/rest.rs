use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{DataSource, Filter};
use crate::error::{Result, ShopError};
use crate::model::{Record, Table};

/// Path of the PostgREST API below the project URL.
const REST_PATH: &str = "rest/v1/";

/// Asks PostgREST for a bare object instead of an array. Zero or several
/// matching rows then come back as HTTP 406.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST client for one credential.
///
/// Cloning is cheap; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct RestSource {
    inner: Arc<RestSourceInner>,
}

struct RestSourceInner {
    client: reqwest::Client,
    base: Url,
}

impl RestSource {
    /// Create a client for the project at `url`, authenticating with `key`.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is malformed, the key is not a valid header
    /// value, or the HTTP client fails to build.
    pub fn new(url: &str, key: &SecretString) -> Result<Self> {
        // reqwest is built without a default crypto provider; installing
        // twice is harmless.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut headers = HeaderMap::new();
        headers.insert("apikey", secret_header(key.expose_secret())?);
        headers.insert(
            AUTHORIZATION,
            secret_header(&format!("Bearer {}", key.expose_secret()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(RestSourceInner {
                client,
                base: rest_base(url)?,
            }),
        })
    }

    fn table_url(&self, table: Table, filter: Option<&Filter>) -> Result<Url> {
        let mut url = self.inner.base.join(table.as_str())?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            if let Some(f) = filter {
                pairs.append_pair(&f.column, &format!("eq.{}", f.value));
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl DataSource for RestSource {
    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Record>> {
        let url = self.table_url(table, filter)?;
        debug!(%table, %url, "select");
        let response = self.inner.client.get(url).send().await?;
        read_response(table, response).await
    }

    async fn select_single(&self, table: Table, filter: &Filter) -> Result<Record> {
        let url = self.table_url(table, Some(filter))?;
        debug!(%table, %url, "select single");
        let response = self
            .inner
            .client
            .get(url)
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;
        read_response(table, response).await
    }

    async fn insert(&self, table: Table, row: Record) -> Result<Record> {
        let url = self.table_url(table, None)?;
        debug!(%table, "insert");
        let response = self
            .inner
            .client
            .post(url)
            .header(ACCEPT, SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        read_response(table, response).await
    }
}

async fn read_response<T: DeserializeOwned>(table: Table, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    if status == StatusCode::NOT_ACCEPTABLE {
        return Err(ShopError::NotFound(format!("{}: {}", table, message)));
    }
    Err(ShopError::Backend {
        status: status.as_u16(),
        message,
    })
}

/// Pull PostgREST's `message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn rest_base(url: &str) -> Result<Url> {
    let mut base = Url::parse(url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(REST_PATH)?)
}

fn secret_header(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| ShopError::Config(format!("Invalid API key format: {}", e)))?;
    header.set_sensitive(true);
    Ok(header)
}
