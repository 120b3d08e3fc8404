use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;

use super::types::{ResponseEnvelope, RpcOutcome};
use super::NodeRpc;

/// A mock node for testing. Records every call and answers from a table of
/// canned `result` bodies keyed by method, populated via the builder pattern.
pub struct MockRpc {
    results: HashMap<String, String>,
    calls: Mutex<Vec<(String, Vec<serde_json::Value>)>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            results: HashMap::new(),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<serde_json::Value>)> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

pub struct MockRpcBuilder {
    results: HashMap<String, String>,
}

impl MockRpcBuilder {
    /// Answer `method` with the given raw JSON `result`.
    pub fn with_result(mut self, method: &str, raw_result: &str) -> Self {
        self.results.insert(method.to_owned(), raw_result.to_owned());
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            results: self.results,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<RpcOutcome, CoreError> {
        let id = {
            let mut calls = self
                .calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            calls.push((method.to_owned(), params));
            calls.len() as i64
        };

        // Unknown methods get the node's "Method not found" answer.
        let body = match self.results.get(method) {
            Some(result) => format!(r#"{{"result":{result},"error":null,"id":{id}}}"#),
            None => format!(
                r#"{{"result":null,"error":{{"code":-32601,"message":"Method not found"}},"id":{id}}}"#
            ),
        };
        let envelope: ResponseEnvelope = serde_json::from_str(&body)?;
        Ok(RpcOutcome {
            status_code: 200,
            envelope,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn convenience_operations_forward_method_and_param_order() {
        let rpc = MockRpc::builder().build();

        rpc.get_info().await.unwrap();
        rpc.get_balance("test1", 1).await.unwrap();
        rpc.validate_address("mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo")
            .await
            .unwrap();
        rpc.estimate_fee(6).await.unwrap();
        rpc.send_to_address("mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo", 0.1)
            .await
            .unwrap();
        rpc.get_new_address("test1").await.unwrap();
        rpc.move_funds("alice", "bob", 2.5).await.unwrap();

        let calls = rpc.calls();
        let expected = vec![
            ("getinfo".to_owned(), vec![]),
            ("getbalance".to_owned(), vec![json!("test1"), json!(1)]),
            (
                "validateaddress".to_owned(),
                vec![json!("mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo")],
            ),
            ("estimatesmartfee".to_owned(), vec![json!(6)]),
            (
                "sendtoaddress".to_owned(),
                vec![json!("mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo"), json!(0.1)],
            ),
            ("getnewaddress".to_owned(), vec![json!("test1")]),
            ("move".to_owned(), vec![json!("alice"), json!("bob"), json!(2.5)]),
        ];
        assert_eq!(calls, expected);
    }

    #[tokio::test]
    async fn canned_result_is_returned_as_data() {
        let rpc = MockRpc::builder()
            .with_result("getnewaddress", r#""mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo""#)
            .build();

        let out = rpc.get_new_address("test1").await.unwrap();
        assert_eq!(out.status_code, 200);
        let address: String = out.into_result().unwrap();
        assert_eq!(address, "mgzMtBQTFxi4v7gv3exg4MQTddHeDWPBVo");
    }

    #[tokio::test]
    async fn unknown_method_surfaces_as_envelope_error() {
        let rpc = MockRpc::builder().build();
        let out = rpc.call("getblockcount", Vec::new()).await.unwrap();
        assert_eq!(out.status_code, 200);
        assert!(!out.is_success());

        #[derive(serde::Deserialize)]
        struct RpcErr {
            code: i64,
        }
        let err: RpcErr = out.envelope.error_as().unwrap();
        assert_eq!(err.code, -32601);
    }
}
