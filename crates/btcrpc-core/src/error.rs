use serde_json::value::RawValue;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The HTTP exchange itself failed (connect, DNS, timeout, body read).
    #[error("RPC transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the body is not a valid response envelope.
    #[error("invalid RPC response (HTTP {status}): {message}")]
    Protocol { status: u16, message: String },

    /// The node answered with a non-null `error` field.
    #[error("RPC error (HTTP {status}): {error}")]
    Rpc { status: u16, error: Box<RawValue> },

    #[error("JSON serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}
