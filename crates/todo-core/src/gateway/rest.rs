//! REST Gateway
//!
//! Talks to a PostgREST endpoint (`{url}/rest/v1/{table}`), the wire format
//! used by hosted Postgres services such as Supabase.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::TaskGateway;
use crate::config::{ResolvedConfig, StoreConfig};
use crate::domain::{StoreError, StoreResult, Task, TaskId};

const PREFER_MINIMAL: &str = "return=minimal";

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct NewTaskRow<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

/// Error body shape returned by PostgREST and the API gateway in front of it
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "msg", alias = "error_description")]
    message: Option<String>,
}

/// reqwest-backed gateway.
///
/// Always constructible: a missing or malformed configuration is reported as
/// [`StoreError::Config`] by the first call instead of at startup.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: reqwest::Client,
    config: StoreConfig,
}

impl RestGateway {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn table_url(resolved: &ResolvedConfig) -> StoreResult<Url> {
        let mut url = resolved.base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| StoreError::Config(format!("cannot use {} as a base URL", resolved.base)))?
            .pop_if_empty()
            .extend(["rest", "v1", resolved.table.as_str()]);
        Ok(url)
    }

    /// Table URL narrowed to the row whose id equals `id`
    fn row_url(resolved: &ResolvedConfig, id: &TaskId) -> StoreResult<Url> {
        let mut url = Self::table_url(resolved)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, resolved: &ResolvedConfig) -> RequestBuilder {
        debug!(%method, %url, "store request");
        self.client
            .request(method, url)
            .header("apikey", resolved.key.as_str())
            .bearer_auth(&resolved.key)
    }

    async fn send(request: RequestBuilder) -> StoreResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: rejection_message(status, &body),
        })
    }
}

/// Prefer the store's own `message`, then the raw body, then the reason phrase.
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                trimmed.to_string()
            }
        })
}

#[async_trait(?Send)]
impl TaskGateway for RestGateway {
    async fn list_all(&self) -> StoreResult<Vec<Task>> {
        let resolved = self.config.validate()?;
        let mut url = Self::table_url(&resolved)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let response = Self::send(self.request(Method::GET, url, &resolved)).await?;
        let body = response.text().await?;
        let tasks: Vec<Task> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
        info!(count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    async fn insert(&self, title: &str) -> StoreResult<()> {
        let resolved = self.config.validate()?;
        let url = Self::table_url(&resolved)?;
        let rows = [NewTaskRow {
            title,
            completed: false,
        }];

        let request = self
            .request(Method::POST, url, &resolved)
            .header("Prefer", PREFER_MINIMAL)
            .json(&rows);
        Self::send(request).await?;
        info!(title, "task inserted");
        Ok(())
    }

    async fn update(&self, id: &TaskId, completed: bool) -> StoreResult<()> {
        let resolved = self.config.validate()?;
        let url = Self::row_url(&resolved, id)?;

        let request = self
            .request(Method::PATCH, url, &resolved)
            .header("Prefer", PREFER_MINIMAL)
            .json(&CompletedPatch { completed });
        Self::send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        let resolved = self.config.validate()?;
        let url = Self::row_url(&resolved, id)?;

        Self::send(self.request(Method::DELETE, url, &resolved)).await?;
        Ok(())
    }
}
