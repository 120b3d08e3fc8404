//! Response-side types handed back to callers.
//!
//! The node's `result` and `error` payloads are kept as undecoded
//! [`RawValue`]s; callers pick the concrete type they expect with
//! [`ResponseEnvelope::result_as`] / [`ResponseEnvelope::error_as`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::CoreError;

// ==============================================================================
// Response Envelope
// ==============================================================================

/// Decoded JSON-RPC response: `{"id": .., "error": .., "result": ..}`.
///
/// JSON `null` and a missing field both map to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub error: Option<Box<RawValue>>,
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
}

impl ResponseEnvelope {
    /// Decode `result` into `T`. A null result decodes as JSON `null`, so
    /// `Option<_>` targets see `None`.
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        decode_raw(self.result.as_deref())
    }

    pub fn error_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        decode_raw(self.error.as_deref())
    }
}

fn decode_raw<T: DeserializeOwned>(raw: Option<&RawValue>) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw.map_or("null", RawValue::get))
}

// ==============================================================================
// Outcome
// ==============================================================================

/// One completed HTTP exchange: the status code and the decoded envelope.
///
/// Both signals are always populated. A 200 status does not imply a null
/// `error`, and a non-2xx status still carries whatever envelope the node
/// sent (often an empty one).
#[derive(Debug, Clone, Serialize)]
pub struct RpcOutcome {
    pub status_code: u16,
    pub envelope: ResponseEnvelope,
}

impl RpcOutcome {
    pub fn id(&self) -> Option<i64> {
        self.envelope.id
    }

    pub fn result(&self) -> Option<&RawValue> {
        self.envelope.result.as_deref()
    }

    pub fn error(&self) -> Option<&RawValue> {
        self.envelope.error.as_deref()
    }

    /// 2xx status and no RPC-level error.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.envelope.error.is_none()
    }

    /// Collapse the outcome into a single error channel and decode `result`.
    ///
    /// A non-null `error` becomes [`CoreError::Rpc`] with the raw payload
    /// untouched. Otherwise a result that does not decode into `T` is
    /// reported as [`CoreError::Protocol`].
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, CoreError> {
        let status = self.status_code;
        if let Some(error) = self.envelope.error {
            return Err(CoreError::Rpc { status, error });
        }
        self.envelope
            .result_as()
            .map_err(|e| CoreError::Protocol {
                status,
                message: format!("decode RPC result: {e}"),
            })
    }
}
