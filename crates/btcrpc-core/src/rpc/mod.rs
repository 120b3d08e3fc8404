//! Node RPC abstraction layer.
//!
//! Defines the [`NodeRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod operations;
pub mod protocol;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use operations::Operation;
pub use types::{ResponseEnvelope, RpcOutcome};

use async_trait::async_trait;

use crate::error::CoreError;

/// Generic RPC call plus the named wallet/node operations built on it.
///
/// Implementations only provide [`NodeRpc::call`]. The returned outcome
/// keeps the HTTP status and the node's `error` field side by side; callers
/// check both.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Issue `method` with positional `params` and return the raw outcome.
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<RpcOutcome, CoreError>;

    async fn invoke(&self, op: &Operation) -> Result<RpcOutcome, CoreError> {
        self.call(op.method(), op.params()).await
    }

    async fn get_info(&self) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::GetInfo).await
    }

    async fn get_balance(&self, account: &str, min_conf: i64) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::GetBalance {
            account: account.to_owned(),
            min_conf,
        })
        .await
    }

    async fn validate_address(&self, address: &str) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::ValidateAddress {
            address: address.to_owned(),
        })
        .await
    }

    /// `estimatesmartfee` for a confirmation target in blocks.
    async fn estimate_fee(&self, blocks: i64) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::EstimateFee { blocks }).await
    }

    /// Amounts are forwarded as given; the node does all validation.
    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
    ) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::SendToAddress {
            address: address.to_owned(),
            amount,
        })
        .await
    }

    async fn get_new_address(&self, account: &str) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::GetNewAddress {
            account: account.to_owned(),
        })
        .await
    }

    /// Account-to-account `move`.
    async fn move_funds(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<RpcOutcome, CoreError> {
        self.invoke(&Operation::Move {
            from: from.to_owned(),
            to: to.to_owned(),
            amount,
        })
        .await
    }
}
