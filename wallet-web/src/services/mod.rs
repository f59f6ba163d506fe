//! Browser services: the wallet bridge, provider handle, and clipboard.

pub mod bridge;
pub mod clipboard;
pub mod ethereum;
pub mod provider;

#[cfg(test)]
pub mod mock;

pub use bridge::{Bridge, Subscription, WalletEvent};
pub use ethereum::EthereumBridge;
pub use provider::{NetworkPolicy, Web3Provider};
