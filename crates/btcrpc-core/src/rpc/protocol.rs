//! JSON-RPC envelope encoding and decoding.
//!
//! Pure functions only: id assignment belongs to the client, and nothing here
//! touches the network.

use serde::Serialize;

use crate::error::CoreError;

use super::types::ResponseEnvelope;

/// Legacy protocol marker the node accepts in the `jsonrpc` field.
pub const PROTOCOL_VERSION: &str = "0.1";

#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    pub jsonrpc: &'static str,
    pub id: u32,
    pub method: &'a str,
    pub params: &'a [serde_json::Value],
}

impl<'a> RequestEnvelope<'a> {
    pub fn new(id: u32, method: &'a str, params: &'a [serde_json::Value]) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Serialize a request envelope. `method` is not checked locally; an
/// unknown method comes back from the node as an RPC error.
pub fn build_request(
    method: &str,
    params: &[serde_json::Value],
    id: u32,
) -> Result<Vec<u8>, CoreError> {
    Ok(serde_json::to_vec(&RequestEnvelope::new(id, method, params))?)
}

/// Convert any serializable value into a positional parameter.
pub fn to_param<T: Serialize>(value: T) -> Result<serde_json::Value, CoreError> {
    Ok(serde_json::to_value(value)?)
}

/// Decode a response body.
///
/// An empty body is accepted as an all-null envelope: bitcoind answers
/// rejected credentials with `401` and no payload. Anything else that is not
/// a UTF-8 JSON envelope is a [`CoreError::Protocol`] tagged with `status`.
pub fn decode_response(status: u16, body: &[u8]) -> Result<ResponseEnvelope, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ResponseEnvelope::default());
    }
    serde_json::from_slice(body).map_err(|e| CoreError::Protocol {
        status,
        message: format!(
            "decode JSON-RPC response: {e}; body={}",
            String::from_utf8_lossy(body)
        ),
    })
}
