//! Menu Source Client
//!
//! Timed, cancellable HTTP GET against the Delivergate menu endpoint.
//! reqwest uses the browser fetch() API on wasm and hyper on native; in both
//! cases dropping the request future aborts the underlying request, which is
//! how the timeout cancels an in-flight fetch.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{select, AbortRegistration, Abortable, Aborted, Either};
use futures::pin_mut;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use serde_json::Value;
use tracing::debug;

use crate::config::MenuConfig;
use crate::error::{ConfigError, FetchError};
use crate::timer;

const TENANT_HEADER: &str = "x-tenant-code";

/// Anything that can produce the raw menu JSON
#[async_trait(?Send)]
pub trait MenuSource {
    /// Fetch the raw menu. Aborting the handle paired with `cancel` settles
    /// the call with a network error.
    async fn fetch_menu(&self, cancel: AbortRegistration) -> Result<Value, FetchError>;
}

/// Race `request` against a timer of `timeout`.
///
/// The loser is dropped: a late response after the timer fired is never
/// observed by the caller.
pub async fn with_timeout<T, F>(
    request: F,
    timeout: Duration,
    cancel: AbortRegistration,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let request = Abortable::new(request, cancel);
    let timer = timer::sleep(timeout);
    pin_mut!(request, timer);

    match select(request, timer).await {
        Either::Left((Ok(outcome), _)) => outcome,
        Either::Left((Err(Aborted), _)) => Err(FetchError::Network {
            message: "request aborted".to_string(),
        }),
        Either::Right(((), _)) => Err(FetchError::Timeout {
            after_ms: timeout.as_millis() as u64,
        }),
    }
}

/// reqwest-backed source for the configured main menu
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: reqwest::Client,
    url: String,
    config: MenuConfig,
}

impl HttpMenuSource {
    pub fn new(config: MenuConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_url(config.menu_url()?, config))
    }

    /// Source for an explicit endpoint, keeping headers and timeout from `config`
    pub fn with_url(url: impl Into<String>, config: MenuConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            config,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(ORIGIN, self.config.origin.as_str())
            .header(REFERER, self.config.referer.as_str())
            .header(TENANT_HEADER, self.config.tenant_code.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            let body = response.text().await.unwrap_or_default();
            let message = match body.trim() {
                "" => reason.to_string(),
                text => text.to_string(),
            };
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait(?Send)]
impl MenuSource for HttpMenuSource {
    async fn fetch_menu(&self, cancel: AbortRegistration) -> Result<Value, FetchError> {
        debug!(url = %self.url, timeout_ms = self.config.timeout_ms, "requesting menu");
        with_timeout(self.request(), self.config.timeout(), cancel).await
    }
}
