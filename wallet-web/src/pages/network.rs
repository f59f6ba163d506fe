//! Network Page - show the connected account and network

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn NetworkPage() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px;">
                <h1 class="card-title" style="text-align: center;">"Wallet Status"</h1>

                <p style="color: var(--text-secondary);">"Status"</p>
                <p style="font-weight: bold;">
                    {move || if wallet.is_connected() { "Connected" } else { "Not connected" }}
                </p>

                <p style="color: var(--text-secondary);">"Account"</p>
                <p style="font-family: monospace; word-break: break-all;">
                    {move || wallet.account().unwrap_or_else(|| "-".to_string())}
                </p>

                <p style="color: var(--text-secondary);">"Network"</p>
                <p>{move || wallet.network().unwrap_or_else(|| "-".to_string())}</p>
            </div>
        </div>
    }
}
