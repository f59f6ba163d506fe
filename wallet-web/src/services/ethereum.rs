//! # Injected Ethereum Bridge via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 object a wallet extension injects as
//! `window.ethereum` (MetaMask and compatible wallets).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use shared::dto::rpc::{RpcErrorPayload, RpcRequest};
use wasm_bindgen::prelude::*;

use crate::error::{BridgeError, BridgeResult};
use crate::services::bridge::{Bridge, Listener, ListenerId, WalletEvent};

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function getEthereum() {
    if (typeof window === 'undefined' || !window.ethereum) {
        return null;
    }
    return window.ethereum;
}

export async function ethereumRequest(ethereum, args) {
    try {
        return await ethereum.request(args);
    } catch (error) {
        // Normalise to a plain { code, message } object so Rust can decode it
        if (error && typeof error === 'object' && 'code' in error) {
            throw { code: Number(error.code), message: String(error.message ?? '') };
        }
        throw { code: 0, message: error instanceof Error ? error.message : String(error) };
    }
}

export function ethereumOn(ethereum, event, handler) {
    ethereum.on(event, handler);
}

export function ethereumRemoveListener(ethereum, event, handler) {
    ethereum.removeListener(event, handler);
}
")]
extern "C" {
    /// The injected bridge, or null when no wallet extension is installed.
    fn getEthereum() -> Option<JsValue>;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(ethereum: &JsValue, args: JsValue) -> Result<JsValue, JsValue>;

    fn ethereumOn(ethereum: &JsValue, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    fn ethereumRemoveListener(ethereum: &JsValue, event: &str, handler: &Closure<dyn FnMut(JsValue)>);
}

// ============================================================================
// BRIDGE
// ============================================================================

pub struct EthereumBridge {
    ethereum: JsValue,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut(JsValue)>>>,
    next_id: Cell<u64>,
}

impl EthereumBridge {
    /// Returns `None` when the page has no injected wallet.
    pub fn detect() -> Option<Rc<dyn Bridge>> {
        let ethereum = getEthereum()?;
        log::info!("Injected wallet bridge detected");
        Some(Rc::new(Self {
            ethereum,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }))
    }
}

fn js_error(err: JsValue) -> BridgeError {
    if let Ok(payload) = serde_wasm_bindgen::from_value::<RpcErrorPayload>(err.clone()) {
        return payload.into();
    }
    match err.as_string() {
        Some(message) => BridgeError::Js(message),
        None => BridgeError::Js(format!("{:?}", err)),
    }
}

#[async_trait(?Send)]
impl Bridge for EthereumBridge {
    async fn request(&self, request: RpcRequest) -> BridgeResult<Value> {
        let args = serde_wasm_bindgen::to_value(&request)
            .map_err(|e| BridgeError::Decode(e.to_string()))?;
        let result = ethereumRequest(&self.ethereum, args).await.map_err(js_error)?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Decode(e.to_string()))
    }

    fn add_listener(&self, event: WalletEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            match serde_wasm_bindgen::from_value::<Value>(payload) {
                Ok(value) => listener(value),
                Err(e) => log::warn!("Ignoring {} event with undecodable payload: {}", event.name(), e),
            }
        });
        ethereumOn(&self.ethereum, event.name(), &closure);
        self.listeners.borrow_mut().insert(id, closure);
        id
    }

    fn remove_listener(&self, event: WalletEvent, id: ListenerId) {
        if let Some(closure) = self.listeners.borrow_mut().remove(&id) {
            ethereumRemoveListener(&self.ethereum, event.name(), &closure);
        }
    }
}
