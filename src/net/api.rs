//! REST helpers for the user-info endpoint.
//!
//! Browser (wasm32): requests go through `gloo-net` and the fetch API's
//! credentials mode. Native (SSR, tests): requests go through `reqwest` with
//! a cookie store standing in for the browser's cookie jar. The free
//! `fetch_info` shares one process-wide client so that jar persists between
//! calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged at error level and then returned as
//! `RequestFailed`. There is no retry and no fallback value; callers decide
//! what the user sees.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::OnceLock;

use super::config::ApiConfig;
use super::types::{InfoResponse, RequestFailed};

/// HTTP client bound to one backend configuration.
#[derive(Debug, Clone)]
pub struct InfoClient {
    config: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl InfoClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed::Transport` if the native HTTP client cannot be
    /// constructed. Browser builds never fail here.
    pub fn new(config: ApiConfig) -> Result<Self, RequestFailed> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            // No timeout: a request waits on the transport for as long as it takes.
            let http = reqwest::Client::builder()
                .cookie_store(config.include_credentials)
                .build()
                .map_err(|e| RequestFailed::Transport(e.to_string()))?;
            Ok(Self { config, http })
        }
        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self { config })
        }
    }

    /// `GET /api/info` and return the JSON body as-is.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed` on a non-success status, a transport failure,
    /// or a body that is not JSON. The failure is logged before returning.
    pub async fn fetch_info(&self) -> Result<InfoResponse, RequestFailed> {
        let url = self.config.info_url();
        log::debug!("GET {url} (credentials: {})", self.config.include_credentials);
        self.get_json(&url)
            .await
            .inspect_err(|e| log::error!("Error fetching user info from {url}: {e}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json(&self, url: &str) -> Result<InfoResponse, RequestFailed> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RequestFailed::Status { status: status.as_u16() });
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        decode_body(&body)
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json(&self, url: &str) -> Result<InfoResponse, RequestFailed> {
        let credentials = if self.config.include_credentials {
            web_sys::RequestCredentials::Include
        } else {
            web_sys::RequestCredentials::Omit
        };
        let resp = gloo_net::http::Request::get(url)
            .credentials(credentials)
            .send()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestFailed::Status { status: resp.status() });
        }
        let body = resp
            .binary()
            .await
            .map_err(|e| RequestFailed::Transport(e.to_string()))?;
        decode_body(&body)
    }
}

static SHARED_CLIENT: OnceLock<Result<InfoClient, RequestFailed>> = OnceLock::new();

/// Process-wide client, built from `config` on first use. Later calls ignore
/// `config` and return the same client (or the same build failure).
fn shared_client(config: impl FnOnce() -> ApiConfig) -> Result<&'static InfoClient, RequestFailed> {
    SHARED_CLIENT
        .get_or_init(|| InfoClient::new(config()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Fetch the current user's info through the shared client, configured from
/// the environment on first use.
///
/// # Errors
///
/// See [`InfoClient::fetch_info`].
pub async fn fetch_info() -> Result<InfoResponse, RequestFailed> {
    let client = shared_client(ApiConfig::from_env)
        .inspect_err(|e| log::error!("Error fetching user info: {e}"))?;
    client.fetch_info().await
}

fn decode_body(body: &[u8]) -> Result<InfoResponse, RequestFailed> {
    serde_json::from_slice::<serde_json::Value>(body)
        .map(InfoResponse::new)
        .map_err(|e| RequestFailed::Decode(e.to_string()))
}
