//! # EIP-1193 JSON-RPC DTOs
//!
//! ```text
//! ethereum.request({ method: "eth_accounts", params: [] })
//!   -> ["0x52908400098527886e0f7030069857d2e4169ee7"]
//! ```
//!
//! A rejected request carries an error object:
//!
//! ```text
//! { "code": 4001, "message": "User rejected the request." }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const METHOD_REQUEST_PERMISSIONS: &str = "wallet_requestPermissions";
pub const METHOD_ACCOUNTS: &str = "eth_accounts";
pub const METHOD_CHAIN_ID: &str = "eth_chainId";

pub const EVENT_ACCOUNTS_CHANGED: &str = "accountsChanged";
pub const EVENT_CHAIN_CHANGED: &str = "chainChanged";

/// EIP-1193 provider error codes.
pub mod codes {
    pub const USER_REJECTED: i64 = 4001;
    pub const UNSUPPORTED_METHOD: i64 = 4200;
}

/// Arguments object passed to `ethereum.request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// `wallet_requestPermissions` for account access; surfaces the wallet's account picker.
    pub fn request_account_permission() -> Self {
        Self::new(METHOD_REQUEST_PERMISSIONS, json!([{ "eth_accounts": {} }]))
    }

    pub fn accounts() -> Self {
        Self::new(METHOD_ACCOUNTS, json!([]))
    }

    pub fn chain_id() -> Self {
        Self::new(METHOD_CHAIN_ID, json!([]))
    }
}

/// Error object a bridge rejects a request with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorPayload {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_request_shape() {
        let value = serde_json::to_value(RpcRequest::request_account_permission()).unwrap();
        assert_eq!(
            value,
            json!({ "method": "wallet_requestPermissions", "params": [{ "eth_accounts": {} }] })
        );
    }

    #[test]
    fn test_error_payload_parses_without_data() {
        let payload: RpcErrorPayload =
            serde_json::from_value(json!({ "code": 4001, "message": "User rejected the request." }))
                .unwrap();
        assert_eq!(payload.code, codes::USER_REJECTED);
        assert_eq!(payload.data, None);
    }
}
