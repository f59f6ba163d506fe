//! Home Page - wallet connection summary

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px; text-align: center;">
                <h1 class="card-title">"Welcome"</h1>
                {move || match wallet.account() {
                    Some(account) => view! {
                        <p style="color: #cccccc;">
                            "Connected as "
                            <span style="font-family: monospace;">{truncate_address(&account)}</span>
                        </p>
                    }.into_any(),
                    None => view! {
                        <p style="color: #cccccc;">"Connect your wallet using the button in the top right."</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
