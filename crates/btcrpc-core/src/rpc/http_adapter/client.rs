use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::CoreError;

use super::super::protocol::{build_request, decode_response};
use super::super::types::RpcOutcome;
use super::super::NodeRpc;
use super::connection::{build_http_client, parse_base_url, resolve_auth};

/// JSON-RPC client for one node over HTTP(S).
///
/// Request ids start at 1 and increase by one per call. The counter belongs
/// to this instance, so clients pointed at different nodes never share a
/// sequence. Share one client across tasks with `Arc` or plain references.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
    content_type: header::HeaderValue,
    auth: Option<(String, String)>,
    /// Last id handed out. Held across increment and envelope encoding so
    /// concurrent calls never reuse an id.
    last_id: Mutex<u32>,
}

impl HttpRpcClient {
    /// Create a client with a `reqwest` transport built from the config's
    /// timeouts.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let client = build_http_client(&config)?;
        Self::with_http_client(config, client)
    }

    /// Create a client on top of a caller-supplied transport. The config's
    /// timeouts are ignored; deadlines are whatever `client` was built with.
    pub fn with_http_client(
        config: ClientConfig,
        client: reqwest::Client,
    ) -> Result<Self, CoreError> {
        let url = parse_base_url(&config)?;
        let content_type = header::HeaderValue::from_str(config.content_type()).map_err(|e| {
            CoreError::Config(format!(
                "invalid content type `{}`: {e}",
                config.content_type().escape_debug()
            ))
        })?;
        let auth = resolve_auth(config.login(), config.password());
        debug!(
            rpc.url = %url,
            rpc.auth = auth.is_some(),
            rpc.content_type = config.content_type(),
            "rpc client configured"
        );

        Ok(Self {
            client,
            url,
            content_type,
            auth,
            last_id: Mutex::new(0),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Id used by the most recent call, or 0 before the first one.
    pub fn last_request_id(&self) -> u32 {
        *self.last_id.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign the next id and encode the envelope under the lock.
    fn next_request(
        &self,
        method: &str,
        params: &[serde_json::Value],
    ) -> Result<(u32, Vec<u8>), CoreError> {
        let mut last_id = self.last_id.lock().unwrap_or_else(PoisonError::into_inner);
        let id = last_id.wrapping_add(1);
        let body = build_request(method, params, id)?;
        *last_id = id;
        Ok((id, body))
    }
}

#[async_trait]
impl NodeRpc for HttpRpcClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<RpcOutcome, CoreError> {
        let (id, body) = self.next_request(method, &params)?;
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );

        let mut builder = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, self.content_type.clone())
            .body(body);
        if let Some((ref login, ref password)) = self.auth {
            builder = builder.basic_auth(login, Some(password));
        }

        let response = builder.send().await?;
        let status = response.status();

        let body = response.bytes().await?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(
            rpc.id = id,
            rpc.method = method,
            body = %String::from_utf8_lossy(&body),
            "rpc response body"
        );

        let envelope = decode_response(status.as_u16(), &body)?;
        Ok(RpcOutcome {
            status_code: status.as_u16(),
            envelope,
        })
    }
}
