//! # Data Transfer Objects (DTOs)
//!
//! Shapes exchanged with an injected EIP-1193 wallet bridge.
//!
//! - [`rpc`] - JSON-RPC request envelope, method names, and error payload

pub mod rpc;

pub use rpc::*;
