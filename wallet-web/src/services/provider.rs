//! # Provider Handle
//!
//! [`Web3Provider`] wraps a [`Bridge`] and issues the higher level queries the
//! connector needs. Clones share identity; two separately constructed handles
//! over the same bridge are different providers.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use shared::dto::rpc::RpcRequest;
use shared::network::Network;

use crate::error::{BridgeError, BridgeResult};
use crate::services::bridge::Bridge;

/// How a provider reacts when the bridge moves to another chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkPolicy {
    /// Every query re-detects the network; chain switches are tolerated.
    Any,
    /// The first detected network is pinned; later queries fail if the chain moved.
    Static,
}

#[derive(Clone)]
pub struct Web3Provider {
    bridge: Rc<dyn Bridge>,
    policy: NetworkPolicy,
    detected: Rc<Cell<Option<u64>>>,
}

impl Web3Provider {
    pub fn new(bridge: Rc<dyn Bridge>, policy: NetworkPolicy) -> Self {
        Self {
            bridge,
            policy,
            detected: Rc::new(Cell::new(None)),
        }
    }

    pub async fn send(&self, request: RpcRequest) -> BridgeResult<Value> {
        log::debug!("Bridge request: {}", request.method);
        self.bridge.request(request).await
    }

    /// Ask the wallet for account access. Opens the wallet's own account picker.
    pub async fn request_accounts_permission(&self) -> BridgeResult<()> {
        self.send(RpcRequest::request_account_permission()).await?;
        Ok(())
    }

    pub async fn list_accounts(&self) -> BridgeResult<Vec<String>> {
        let value = self.send(RpcRequest::accounts()).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_network(&self) -> BridgeResult<Network> {
        let value = self.send(RpcRequest::chain_id()).await?;
        let network = Network::from_json(&value)?;

        match (self.policy, self.detected.get()) {
            (NetworkPolicy::Static, Some(expected)) if expected != network.chain_id => {
                return Err(BridgeError::NetworkChanged {
                    expected,
                    actual: network.chain_id,
                });
            }
            (NetworkPolicy::Static, Some(_)) => {}
            _ => self.detected.set(Some(network.chain_id)),
        }

        Ok(network)
    }
}

impl PartialEq for Web3Provider {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.detected, &other.detected)
    }
}

impl fmt::Debug for Web3Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Web3Provider")
            .field("policy", &self.policy)
            .field("detected", &self.detected.get())
            .finish()
    }
}
