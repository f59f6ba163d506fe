//! # Shared Wallet Types Library
//!
//! Browser-independent types used by the wallet web front end. Nothing in this
//! crate touches `wasm-bindgen` or `web-sys`, so everything here is testable on
//! the host.
//!
//! ## Structure
//!
//! - **[`dto`]**: JSON-RPC shapes exchanged with an injected EIP-1193 bridge
//!   - **[`dto::rpc`]**: request envelope, method names, error payload
//! - **[`network`]**: chain id parsing and network name resolution
//! - **[`utils`]**: address display helpers
//!
//! ## Wire Format
//!
//! Bridge calls are JSON-RPC style objects:
//!
//! ```text
//! { "method": "wallet_requestPermissions", "params": [{ "eth_accounts": {} }] }
//! ```
//!
//! Chain ids come back as `0x`-prefixed hex quantities (`"0x1"` for mainnet).
//!
//! ## Usage
//!
//! ```rust
//! use shared::network::Network;
//! use shared::utils::account_preview;
//!
//! let network = Network::from_hex("0xaa36a7").unwrap();
//! assert_eq!(network.name, "sepolia");
//! assert_eq!(account_preview("0x52908400098527886E0F7030069857D2E4169EE7", 6), "0x5290...");
//! ```

pub mod dto;
pub mod network;
pub mod utils;

pub use dto::*;
pub use network::{ChainIdError, Network};
pub use utils::*;
