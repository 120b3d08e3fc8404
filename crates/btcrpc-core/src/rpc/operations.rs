//! Named wallet/node operations as `(method, positional params)` pairs.

use serde_json::json;

/// A convenience operation. Each variant maps onto one RPC method with a
/// fixed parameter order and adds no other logic.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    GetInfo,
    GetBalance { account: String, min_conf: i64 },
    ValidateAddress { address: String },
    EstimateFee { blocks: i64 },
    SendToAddress { address: String, amount: f64 },
    GetNewAddress { account: String },
    Move { from: String, to: String, amount: f64 },
}

impl Operation {
    /// Method names understood by [`Operation::from_name`], in table order.
    pub const METHODS: &'static [&'static str] = &[
        "getinfo",
        "getbalance",
        "validateaddress",
        "estimatesmartfee",
        "sendtoaddress",
        "getnewaddress",
        "move",
    ];

    pub fn method(&self) -> &'static str {
        match self {
            Self::GetInfo => "getinfo",
            Self::GetBalance { .. } => "getbalance",
            Self::ValidateAddress { .. } => "validateaddress",
            Self::EstimateFee { .. } => "estimatesmartfee",
            Self::SendToAddress { .. } => "sendtoaddress",
            Self::GetNewAddress { .. } => "getnewaddress",
            Self::Move { .. } => "move",
        }
    }

    pub fn params(&self) -> Vec<serde_json::Value> {
        match self {
            Self::GetInfo => Vec::new(),
            Self::GetBalance { account, min_conf } => vec![json!(account), json!(min_conf)],
            Self::ValidateAddress { address } => vec![json!(address)],
            Self::EstimateFee { blocks } => vec![json!(blocks)],
            Self::SendToAddress { address, amount } => vec![json!(address), json!(amount)],
            Self::GetNewAddress { account } => vec![json!(account)],
            Self::Move { from, to, amount } => vec![json!(from), json!(to), json!(amount)],
        }
    }

    /// Rebuild an operation from a method name and already-decoded
    /// positional params. Returns `None` for unknown methods or when the
    /// params do not have the table's shape.
    pub fn from_name(method: &str, params: &[serde_json::Value]) -> Option<Self> {
        let str_at = |i: usize| params.get(i).and_then(|v| v.as_str()).map(str::to_owned);
        let int_at = |i: usize| params.get(i).and_then(serde_json::Value::as_i64);
        let float_at = |i: usize| params.get(i).and_then(serde_json::Value::as_f64);

        let op = match (method, params.len()) {
            ("getinfo", 0) => Self::GetInfo,
            ("getbalance", 2) => Self::GetBalance {
                account: str_at(0)?,
                min_conf: int_at(1)?,
            },
            ("validateaddress", 1) => Self::ValidateAddress {
                address: str_at(0)?,
            },
            ("estimatesmartfee", 1) => Self::EstimateFee {
                blocks: int_at(0)?,
            },
            ("sendtoaddress", 2) => Self::SendToAddress {
                address: str_at(0)?,
                amount: float_at(1)?,
            },
            ("getnewaddress", 1) => Self::GetNewAddress {
                account: str_at(0)?,
            },
            ("move", 3) => Self::Move {
                from: str_at(0)?,
                to: str_at(1)?,
                amount: float_at(2)?,
            },
            _ => return None,
        };
        Some(op)
    }
}
