//! Native JSON-RPC client for Bitcoin Core compatible endpoints.
//!
//! Implements [`NodeRpc`](super::NodeRpc) over HTTP(S) using `reqwest`,
//! with optional basic auth and per-client request id sequencing.

mod client;
mod connection;

pub use client::HttpRpcClient;
