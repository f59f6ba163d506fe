//! # Networks
//!
//! The bridge reports the active chain as a hex quantity (`eth_chainId`, or the
//! payload of a `chainChanged` event). This module turns that into a
//! [`Network`] with a human-readable name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name reported for chain ids missing from [`KNOWN_NETWORKS`].
pub const UNKNOWN_NETWORK: &str = "unknown";

/// Well-known chain ids and their names.
pub const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "mainnet"),
    (5, "goerli"),
    (10, "optimism"),
    (56, "bnb"),
    (137, "matic"),
    (8453, "base"),
    (17000, "holesky"),
    (42161, "arbitrum"),
    (43114, "avalanche"),
    (59144, "linea"),
    (80002, "matic-amoy"),
    (11155111, "sepolia"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainIdError {
    #[error("chain id is not a string: {0}")]
    NotAString(String),

    #[error("chain id is missing the 0x prefix: {0}")]
    MissingPrefix(String),

    #[error("chain id is not a valid hex quantity: {0}")]
    InvalidHex(String),
}

/// A network as reported by the wallet bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub chain_id: u64,
    pub name: String,
}

impl Network {
    pub fn from_chain_id(chain_id: u64) -> Self {
        Self {
            chain_id,
            name: network_name(chain_id).to_string(),
        }
    }

    /// Parse a `0x`-prefixed chain id such as `"0xaa36a7"`.
    pub fn from_hex(value: &str) -> Result<Self, ChainIdError> {
        parse_chain_id(value).map(Self::from_chain_id)
    }

    /// Parse the raw JSON value returned by `eth_chainId`.
    ///
    /// Some bridges answer with a plain number instead of a hex string; both are accepted.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ChainIdError> {
        match value {
            serde_json::Value::String(s) => Self::from_hex(s),
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(Self::from_chain_id)
                .ok_or_else(|| ChainIdError::InvalidHex(n.to_string())),
            other => Err(ChainIdError::NotAString(other.to_string())),
        }
    }
}

pub fn network_name(chain_id: u64) -> &'static str {
    KNOWN_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_NETWORK)
}

pub fn parse_chain_id(value: &str) -> Result<u64, ChainIdError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| ChainIdError::MissingPrefix(value.to_string()))?;

    if digits.is_empty() {
        return Err(ChainIdError::InvalidHex(value.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| ChainIdError::InvalidHex(value.to_string()))
}
