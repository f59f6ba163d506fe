//! In-memory [`Bridge`] for tests: scripted responses, recorded calls, and
//! manually emitted events.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use serde_json::{json, Value};
use shared::dto::rpc::{codes, RpcRequest, METHOD_ACCOUNTS, METHOD_CHAIN_ID, METHOD_REQUEST_PERMISSIONS};

use crate::error::{BridgeError, BridgeResult};
use crate::services::bridge::{Bridge, Listener, ListenerId, WalletEvent};

pub struct MockBridge {
    responses: RefCell<HashMap<String, BridgeResult<Value>>>,
    calls: RefCell<Vec<RpcRequest>>,
    listeners: RefCell<Vec<(WalletEvent, ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// A bridge that grants permission, exposes `accounts`, and sits on `chain_id`.
    pub fn with_accounts(accounts: &[&str], chain_id: &str) -> Self {
        let bridge = Self::new();
        bridge.respond(METHOD_REQUEST_PERMISSIONS, Ok(json!([{ "parentCapability": "eth_accounts" }])));
        bridge.respond(METHOD_ACCOUNTS, Ok(json!(accounts)));
        bridge.respond(METHOD_CHAIN_ID, Ok(json!(chain_id)));
        bridge
    }

    pub fn respond(&self, method: &str, response: BridgeResult<Value>) {
        self.responses.borrow_mut().insert(method.to_string(), response);
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|call| call.method == method).count()
    }

    pub fn listener_count(&self, event: WalletEvent) -> usize {
        self.listeners.borrow().iter().filter(|(e, _, _)| *e == event).count()
    }

    pub fn emit(&self, event: WalletEvent, payload: Value) {
        let targets: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(e, _, _)| *e == event)
            .map(|(_, _, listener)| listener.clone())
            .collect();
        for listener in targets {
            listener(payload.clone());
        }
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Suspends once so concurrent callers can interleave.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[async_trait(?Send)]
impl Bridge for MockBridge {
    async fn request(&self, request: RpcRequest) -> BridgeResult<Value> {
        let method = request.method.clone();
        self.calls.borrow_mut().push(request);
        YieldNow(false).await;
        self.responses
            .borrow()
            .get(&method)
            .cloned()
            .unwrap_or_else(|| {
                Err(BridgeError::Rpc {
                    code: codes::UNSUPPORTED_METHOD,
                    message: format!("unsupported method {}", method),
                })
            })
    }

    fn add_listener(&self, event: WalletEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((event, id, listener));
        id
    }

    fn remove_listener(&self, event: WalletEvent, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(e, listener_id, _)| !(*e == event && *listener_id == id));
    }
}

pub fn rc(bridge: MockBridge) -> (Rc<MockBridge>, Rc<dyn Bridge>) {
    let bridge = Rc::new(bridge);
    let dyn_bridge: Rc<dyn Bridge> = bridge.clone();
    (bridge, dyn_bridge)
}
