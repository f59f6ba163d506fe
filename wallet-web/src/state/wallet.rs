//! Wallet state management
//!
//! [`WalletConnector`] owns the connection to the injected wallet: the active
//! account, the provider handle, the network name, and the last error. The
//! four fields are independent signals with raw setters; disconnecting is just
//! clearing all of them.

use std::rc::Rc;

use leptos::prelude::*;
use serde_json::Value;

use crate::error::{BridgeResult, WalletError};
use crate::services::bridge::{Bridge, Subscription, WalletEvent};
use crate::services::provider::{NetworkPolicy, Web3Provider};

#[derive(Clone, Copy)]
pub struct WalletConnector {
    account: RwSignal<Option<String>>,
    provider: RwSignal<Option<Web3Provider>, LocalStorage>,
    network: RwSignal<Option<String>>,
    error: RwSignal<Option<WalletError>>,
    connecting: RwSignal<bool>,
    bridge: StoredValue<Option<Rc<dyn Bridge>>, LocalStorage>,
}

impl WalletConnector {
    /// Empty connection state. `bridge` is `None` when no wallet is installed.
    pub fn new(bridge: Option<Rc<dyn Bridge>>) -> Self {
        Self {
            account: RwSignal::new(None),
            provider: RwSignal::new_local(None),
            network: RwSignal::new(None),
            error: RwSignal::new(None),
            connecting: RwSignal::new(false),
            bridge: StoredValue::new_local(bridge),
        }
    }

    /// Like [`new`](Self::new), and keeps bridge listeners registered for the
    /// lifetime of the current owner. Listeners are re-registered whenever the
    /// stored provider changes and removed when the owner is cleaned up.
    pub fn mount(bridge: Option<Rc<dyn Bridge>>) -> Self {
        let connector = Self::new(bridge);
        let subscription = StoredValue::new_local(None::<Subscription>);

        Effect::new(move || {
            connector.provider.track();
            subscription.update_value(|current| {
                // Release the old listeners before attaching new ones
                current.take();
                *current = connector.subscribe();
            });
        });

        on_cleanup(move || {
            subscription.try_update_value(|current| current.take());
        });

        connector
    }

    // ------------------------------------------------------------------
    // Readers
    // ------------------------------------------------------------------

    pub fn account(&self) -> Option<String> {
        self.account.get()
    }

    pub fn provider(&self) -> Option<Web3Provider> {
        self.provider.get()
    }

    pub fn network(&self) -> Option<String> {
        self.network.get()
    }

    pub fn error(&self) -> Option<WalletError> {
        self.error.get()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.with(|error| error.as_ref().map(|e| e.to_string()))
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    // ------------------------------------------------------------------
    // Raw mutators
    // ------------------------------------------------------------------

    pub fn set_account(&self, account: Option<String>) {
        self.account.set(account);
    }

    pub fn set_provider(&self, provider: Option<Web3Provider>) {
        self.provider.set(provider);
    }

    pub fn set_network(&self, network: Option<String>) {
        self.network.set(network);
    }

    pub fn set_error(&self, error: Option<WalletError>) {
        self.error.set(error);
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Start a connection attempt without waiting for it.
    pub fn connect_wallet(&self) {
        let connector = *self;
        leptos::task::spawn_local(async move {
            connector.connect().await;
        });
    }

    /// Run a connection attempt to completion. Failures end up in the error
    /// field; nothing is returned to the caller.
    ///
    /// A call made while another attempt is still in flight is ignored.
    pub async fn connect(&self) {
        let Some(bridge) = self.bridge.get_value() else {
            log::warn!("No injected wallet bridge found");
            self.error.set(Some(WalletError::NotInstalled));
            return;
        };

        if self.connecting.get_untracked() {
            log::debug!("Connect already in progress, ignoring");
            return;
        }
        self.connecting.set(true);

        let provider = Web3Provider::new(bridge, NetworkPolicy::Any);
        self.provider.set(Some(provider.clone()));

        if let Err(e) = self.authorize(&provider).await {
            if e.is_user_rejection() {
                log::warn!("Wallet connection rejected by user: {}", e);
            } else {
                log::error!("Error connecting to MetaMask: {}", e);
            }
            self.error.set(Some(WalletError::ConnectFailed));
        }

        self.connecting.set(false);
    }

    async fn authorize(&self, provider: &Web3Provider) -> BridgeResult<()> {
        provider.request_accounts_permission().await?;

        let accounts = provider.list_accounts().await?;
        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("Wallet connected: {}", account);
                self.account.set(Some(account));
            }
            None => {
                log::warn!("Wallet granted permission but returned no accounts");
                self.error.set(Some(WalletError::NoAccounts));
            }
        }

        let network = provider.get_network().await?;
        log::info!("Wallet network: {} (chain {})", network.name, network.chain_id);
        self.network.set(Some(network.name));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bridge events
    // ------------------------------------------------------------------

    pub fn handle_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("Active account changed: {}", account);
                self.account.set(Some(account));
            }
            None => {
                log::info!("Wallet disconnected all accounts");
                self.account.set(None);
                self.error.set(Some(WalletError::PleaseConnect));
            }
        }
    }

    /// Re-read the network name from the stored provider. No-op without one,
    /// or once the owning component has been unmounted.
    pub async fn refresh_network(&self) {
        let Some(Some(provider)) = self.provider.try_get_untracked() else {
            return;
        };
        match provider.get_network().await {
            Ok(network) => {
                log::info!("Network changed: {} (chain {})", network.name, network.chain_id);
                if self.network.try_set(Some(network.name)).is_some() {
                    log::debug!("Connector unmounted, dropping network update");
                }
            }
            Err(e) => log::error!("Failed to refresh network: {}", e),
        }
    }

    /// Register `accountsChanged` and `chainChanged` listeners on the bridge.
    /// Dropping the returned [`Subscription`] removes both.
    pub fn subscribe(&self) -> Option<Subscription> {
        let bridge = self.bridge.get_value()?;
        let connector = *self;

        let on_accounts = move |payload: Value| match serde_json::from_value::<Vec<String>>(payload) {
            Ok(accounts) => connector.handle_accounts_changed(accounts),
            Err(e) => log::warn!("Ignoring malformed accountsChanged payload: {}", e),
        };

        let on_chain = move |_chain_id: Value| {
            if !connector.provider.try_with_untracked(Option::is_some).unwrap_or(false) {
                return;
            }
            leptos::task::spawn_local(async move {
                connector.refresh_network().await;
            });
        };

        log::debug!("Subscribing to wallet bridge events");
        Some(
            Subscription::new(bridge)
                .listen(WalletEvent::AccountsChanged, Rc::new(on_accounts))
                .listen(WalletEvent::ChainChanged, Rc::new(on_chain)),
        )
    }
}

/// Mount a connector on `bridge` and make it available to the component subtree.
pub fn provide_wallet_context(bridge: Option<Rc<dyn Bridge>>) -> WalletConnector {
    let connector = WalletConnector::mount(bridge);
    provide_context(connector);
    connector
}

pub fn use_wallet_context() -> WalletConnector {
    expect_context::<WalletConnector>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use crate::services::mock::{rc, MockBridge};
    use any_spawner::Executor;
    use futures::executor::block_on;
    use serde_json::json;
    use shared::dto::rpc::{METHOD_ACCOUNTS, METHOD_CHAIN_ID, METHOD_REQUEST_PERMISSIONS};

    const ABC: &str = "0xABC0000000000000000000000000000000000001";
    const DEF: &str = "0xDEF0000000000000000000000000000000000002";

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    fn connected(mock: MockBridge) -> (Rc<MockBridge>, WalletConnector) {
        let (mock, bridge) = rc(mock);
        let connector = WalletConnector::new(Some(bridge));
        block_on(connector.connect());
        (mock, connector)
    }

    #[test]
    fn test_connect_without_bridge() {
        let _owner = owner();
        let connector = WalletConnector::new(None);

        block_on(connector.connect());

        assert_eq!(
            connector.error_message().as_deref(),
            Some("MetaMask is not installed. Please install MetaMask and try again.")
        );
        assert_eq!(connector.account(), None);
        assert!(connector.provider().is_none());
        assert_eq!(connector.network(), None);
    }

    #[test]
    fn test_connect_success() {
        let _owner = owner();
        let (mock, connector) = connected(MockBridge::with_accounts(&[ABC, DEF], "0x1"));

        assert_eq!(connector.account().as_deref(), Some(ABC));
        assert_eq!(connector.network().as_deref(), Some("mainnet"));
        assert_eq!(connector.error(), None);
        assert!(connector.provider().is_some());
        assert!(connector.is_connected());
        assert!(!connector.is_connecting());
        assert_eq!(mock.calls(METHOD_REQUEST_PERMISSIONS), 1);
    }

    #[test]
    fn test_connect_no_accounts() {
        let _owner = owner();
        let (_, connector) = connected(MockBridge::with_accounts(&[], "0x1"));

        assert_eq!(connector.account(), None);
        assert_eq!(connector.error_message().as_deref(), Some("No accounts found."));
        // The network is still read after an empty account list
        assert_eq!(connector.network().as_deref(), Some("mainnet"));
    }

    #[test]
    fn test_connect_permission_rejected() {
        let _owner = owner();
        let mock = MockBridge::with_accounts(&[ABC], "0x1");
        mock.respond(
            METHOD_REQUEST_PERMISSIONS,
            Err(BridgeError::Rpc {
                code: 4001,
                message: "User rejected the request.".to_string(),
            }),
        );
        let (mock, connector) = connected(mock);

        assert_eq!(connector.error_message().as_deref(), Some("Failed to connect to MetaMask."));
        assert_eq!(connector.account(), None);
        // Provider is left in place after a failed attempt
        assert!(connector.provider().is_some());
        assert_eq!(mock.calls(METHOD_ACCOUNTS), 0);
        assert!(!connector.is_connecting());
    }

    #[test]
    fn test_connect_network_failure_keeps_account() {
        let _owner = owner();
        let mock = MockBridge::with_accounts(&[ABC], "0x1");
        mock.respond(METHOD_CHAIN_ID, Ok(json!("not-hex")));
        let (_, connector) = connected(mock);

        assert_eq!(connector.account().as_deref(), Some(ABC));
        assert_eq!(connector.network(), None);
        assert_eq!(connector.error(), Some(WalletError::ConnectFailed));
    }

    #[test]
    fn test_overlapping_connect_is_ignored() {
        let _owner = owner();
        let (mock, bridge) = rc(MockBridge::with_accounts(&[ABC], "0x1"));
        let connector = WalletConnector::new(Some(bridge));

        block_on(async {
            futures::join!(connector.connect(), connector.connect());
        });

        assert_eq!(mock.calls(METHOD_REQUEST_PERMISSIONS), 1);
        assert_eq!(connector.account().as_deref(), Some(ABC));

        block_on(connector.connect());
        assert_eq!(mock.calls(METHOD_REQUEST_PERMISSIONS), 2);
    }

    #[test]
    fn test_accounts_changed_events() {
        let _owner = owner();
        let (mock, connector) = connected(MockBridge::with_accounts(&[ABC], "0x1"));
        let _subscription = connector.subscribe().unwrap();

        mock.emit(WalletEvent::AccountsChanged, json!([]));
        assert_eq!(connector.account(), None);
        assert_eq!(connector.error_message().as_deref(), Some("Please connect to MetaMask."));

        mock.emit(WalletEvent::AccountsChanged, json!([DEF]));
        assert_eq!(connector.account().as_deref(), Some(DEF));

        mock.emit(WalletEvent::AccountsChanged, json!({ "bogus": true }));
        assert_eq!(connector.account().as_deref(), Some(DEF));
    }

    #[test]
    fn test_chain_changed_without_provider_is_noop() {
        let _owner = owner();
        let (mock, bridge) = rc(MockBridge::with_accounts(&[ABC], "0x1"));
        let connector = WalletConnector::new(Some(bridge));
        let _subscription = connector.subscribe().unwrap();

        mock.emit(WalletEvent::ChainChanged, json!("0x89"));

        assert_eq!(connector.network(), None);
        assert_eq!(mock.calls(METHOD_CHAIN_ID), 0);
    }

    #[test]
    fn test_refresh_network_after_chain_switch() {
        let _owner = owner();
        let (mock, connector) = connected(MockBridge::with_accounts(&[ABC], "0x1"));

        mock.respond(METHOD_CHAIN_ID, Ok(json!("0x89")));
        block_on(connector.refresh_network());

        assert_eq!(connector.network().as_deref(), Some("matic"));
    }

    #[test]
    fn test_unsubscribe_stops_state_changes() {
        let _owner = owner();
        let (mock, connector) = connected(MockBridge::with_accounts(&[ABC], "0x1"));
        let subscription = connector.subscribe().unwrap();
        assert_eq!(mock.listener_count(WalletEvent::AccountsChanged), 1);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 1);

        drop(subscription);
        assert_eq!(mock.listener_count(WalletEvent::AccountsChanged), 0);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 0);

        mock.emit(WalletEvent::AccountsChanged, json!([]));
        assert_eq!(connector.account().as_deref(), Some(ABC));
        assert_eq!(connector.error(), None);
    }

    #[test]
    fn test_no_subscription_without_bridge() {
        let _owner = owner();
        assert!(WalletConnector::new(None).subscribe().is_none());
    }

    fn init_executor() {
        // Already initialized by another test on this process is fine
        let _ = Executor::init_futures_executor();
    }

    #[test]
    fn test_mount_resubscribes_and_cleans_up() {
        init_executor();
        let owner = owner();
        let (mock, bridge) = rc(MockBridge::with_accounts(&[ABC], "0x1"));
        let connector = WalletConnector::mount(Some(bridge));

        Executor::poll_local();
        assert_eq!(mock.listener_count(WalletEvent::AccountsChanged), 1);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 1);

        // New provider handle: old listeners released, new ones attached
        block_on(connector.connect());
        Executor::poll_local();
        assert_eq!(mock.listener_count(WalletEvent::AccountsChanged), 1);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 1);

        mock.emit(WalletEvent::AccountsChanged, json!([DEF]));
        assert_eq!(connector.account().as_deref(), Some(DEF));

        owner.cleanup();
        assert_eq!(mock.listener_count(WalletEvent::AccountsChanged), 0);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 0);
    }

    #[test]
    fn test_pending_network_refresh_after_unmount() {
        init_executor();
        let owner = owner();
        let (mock, bridge) = rc(MockBridge::with_accounts(&[ABC], "0x1"));
        let connector = WalletConnector::mount(Some(bridge));
        Executor::poll_local();
        block_on(connector.connect());
        Executor::poll_local();

        mock.respond(METHOD_CHAIN_ID, Ok(json!("0x89")));
        mock.emit(WalletEvent::ChainChanged, json!("0x89"));
        let chain_queries = mock.calls(METHOD_CHAIN_ID);

        owner.cleanup();
        Executor::poll_local();

        assert_eq!(mock.calls(METHOD_CHAIN_ID), chain_queries);
        assert_eq!(mock.listener_count(WalletEvent::ChainChanged), 0);
    }

    #[test]
    fn test_chain_changed_refreshes_mounted_network() {
        init_executor();
        let _owner = owner();
        let (mock, bridge) = rc(MockBridge::with_accounts(&[ABC], "0x1"));
        let connector = WalletConnector::mount(Some(bridge));
        Executor::poll_local();
        block_on(connector.connect());
        Executor::poll_local();

        mock.respond(METHOD_CHAIN_ID, Ok(json!("0x89")));
        mock.emit(WalletEvent::ChainChanged, json!("0x89"));
        Executor::poll_local();

        assert_eq!(connector.network().as_deref(), Some("matic"));
    }
}
