//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px); padding: 48px 24px;">
            <div class="card" style="max-width: 700px;">
                <h1 class="card-title" style="text-align: center; margin-bottom: 32px;">"About"</h1>
                <p style="color: #cccccc; line-height: 1.8;">
                    "This front end connects to a browser wallet such as MetaMask to read your active
                    account and network. It never signs transactions and keeps nothing after the page is closed."
                </p>
            </div>
        </div>
    }
}
