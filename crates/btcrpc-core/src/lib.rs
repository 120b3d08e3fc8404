pub mod config;
pub mod error;
pub mod rpc;

pub use config::ClientConfig;
pub use error::CoreError;
pub use rpc::{HttpRpcClient, NodeRpc, Operation, RpcOutcome};
