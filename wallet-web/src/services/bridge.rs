//! # Wallet Bridge Capability
//!
//! The injected wallet object (`window.ethereum`) is reached only through the
//! [`Bridge`] trait, so the connector can be driven by a fake in tests and by
//! [`EthereumBridge`](super::ethereum::EthereumBridge) in the browser.
//!
//! Event listeners are registered through [`Subscription`], which removes every
//! listener it registered when dropped.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use shared::dto::rpc::{RpcRequest, EVENT_ACCOUNTS_CHANGED, EVENT_CHAIN_CHANGED};

use crate::error::BridgeResult;

/// Events pushed by the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalletEvent {
    AccountsChanged,
    ChainChanged,
}

impl WalletEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WalletEvent::AccountsChanged => EVENT_ACCOUNTS_CHANGED,
            WalletEvent::ChainChanged => EVENT_CHAIN_CHANGED,
        }
    }
}

/// Handle identifying one registered listener on a bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type Listener = Rc<dyn Fn(Value)>;

#[async_trait(?Send)]
pub trait Bridge {
    /// Issue an EIP-1193 `request({ method, params })`.
    async fn request(&self, request: RpcRequest) -> BridgeResult<Value>;

    fn add_listener(&self, event: WalletEvent, listener: Listener) -> ListenerId;

    /// Removing an unknown id is a no-op.
    fn remove_listener(&self, event: WalletEvent, id: ListenerId);
}

/// Listener registrations that are released on drop.
pub struct Subscription {
    bridge: Rc<dyn Bridge>,
    listeners: Vec<(WalletEvent, ListenerId)>,
}

impl Subscription {
    pub fn new(bridge: Rc<dyn Bridge>) -> Self {
        Self {
            bridge,
            listeners: Vec::new(),
        }
    }

    pub fn listen(mut self, event: WalletEvent, listener: Listener) -> Self {
        let id = self.bridge.add_listener(event, listener);
        self.listeners.push((event, id));
        self
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for (event, id) in self.listeners.drain(..) {
            log::debug!("Removing {} listener {:?}", event.name(), id);
            self.bridge.remove_listener(event, id);
        }
    }
}
