//! Navigation Bar Component
//!
//! Link list plus the wallet control. The control connects when no account is
//! active; with an account it opens a menu with copy, reconnect, and disconnect.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shared::utils::account_preview;

use crate::services::clipboard;
use crate::state::wallet::{use_wallet_context, WalletConnector};
use crate::utils::constants::{
    ACCOUNT_PREVIEW_LEN, ACTIVE_LINK_COLOR, CONNECTED_COLOR, DISCONNECTED_COLOR, LINK_COLOR, NAV_LINKS,
};

/// Clear all connection state.
pub fn disconnect(wallet: &WalletConnector) {
    wallet.set_account(None);
    wallet.set_provider(None);
    wallet.set_network(None);
    wallet.set_error(None);
}

pub fn wallet_button_label(account: Option<&str>, connecting: bool) -> String {
    match account {
        Some(account) => account_preview(account, ACCOUNT_PREVIEW_LEN),
        None if connecting => "Connecting...".to_string(),
        None => "Connect Wallet".to_string(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = use_wallet_context();
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);

    let close_menu = move || set_menu_open.set(false);

    let on_wallet_click = move |_| {
        if wallet.is_connected() {
            set_menu_open.set(true);
        } else {
            wallet.connect_wallet();
        }
    };

    let on_copy = move |_| {
        if let Some(account) = wallet.account() {
            leptos::task::spawn_local(async move {
                match clipboard::write_text(&account).await {
                    Ok(()) => log::info!("Copied address to clipboard"),
                    Err(e) => log::error!("Failed to copy address: {}", e),
                }
            });
        }
        close_menu();
    };

    let on_reconnect = move |_| {
        close_menu();
        wallet.connect_wallet();
    };

    let on_disconnect = move |_| {
        disconnect(&wallet);
        close_menu();
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; flex-wrap: wrap; justify-content: flex-end; align-items: center;">
                {NAV_LINKS
                    .iter()
                    .map(|&(label, path)| {
                        let active = move || location.pathname.with(|current| current == path);
                        view! {
                            <a
                                href=path
                                class="nav-link"
                                class:active=active
                                style:color=move || if active() { ACTIVE_LINK_COLOR } else { LINK_COLOR }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}

                <div class="wallet-control" style="position: relative;">
                    <button
                        class="wallet-button"
                        style:background-color=move || {
                            if wallet.is_connected() { CONNECTED_COLOR } else { DISCONNECTED_COLOR }
                        }
                        on:click=on_wallet_click
                    >
                        {move || wallet_button_label(wallet.account().as_deref(), wallet.is_connecting())}
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="menu-backdrop" on:click=move |_| close_menu()></div>
                        <ul class="wallet-menu" role="menu" style="position: absolute; top: 100%; right: 0;">
                            <li role="menuitem" on:click=on_copy>"Copy Address"</li>
                            <li role="menuitem" on:click=on_reconnect>"Reconnect"</li>
                            <li role="menuitem" on:click=on_disconnect>"Disconnect"</li>
                        </ul>
                    </Show>

                    {move || wallet.error_message().map(|message| view! {
                        <p class="wallet-error">{message}</p>
                    })}
                </div>
            </div>
        </nav>
    }
}
