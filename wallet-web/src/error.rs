//! # Error Types
//!
//! [`BridgeError`] is the structured failure of a single call into the injected
//! wallet bridge. [`WalletError`] is what the connector surfaces to the UI:
//! every failure of the connect flow collapses into one of its variants, and
//! its `Display` is the exact message shown to the user.

use shared::dto::rpc::RpcErrorPayload;
use shared::network::ChainIdError;
use thiserror::Error;

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// The bridge rejected the request with an EIP-1193 error object.
    #[error("bridge rejected request ({code}): {message}")]
    Rpc { code: i64, message: String },

    /// A JavaScript exception that did not carry an EIP-1193 error object.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The bridge answered with a value of the wrong shape.
    #[error("unexpected bridge response: {0}")]
    Decode(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(#[from] ChainIdError),

    /// Raised by a provider with a static network policy.
    #[error("underlying network changed (expected chain {expected}, got {actual})")]
    NetworkChanged { expected: u64, actual: u64 },
}

impl BridgeError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, BridgeError::Rpc { code, .. } if *code == shared::dto::rpc::codes::USER_REJECTED)
    }
}

impl From<RpcErrorPayload> for BridgeError {
    fn from(payload: RpcErrorPayload) -> Self {
        BridgeError::Rpc {
            code: payload.code,
            message: payload.message,
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Decode(err.to_string())
    }
}

/// Connection errors shown to the user. Only one is held at a time; a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("MetaMask is not installed. Please install MetaMask and try again.")]
    NotInstalled,

    #[error("No accounts found.")]
    NoAccounts,

    #[error("Failed to connect to MetaMask.")]
    ConnectFailed,

    #[error("Please connect to MetaMask.")]
    PleaseConnect,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available in this environment")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Js(String),
}
