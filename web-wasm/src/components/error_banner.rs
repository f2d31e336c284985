//! エラー表示コンポーネント

use leptos::prelude::*;
use shop_search_common::AppState;

#[component]
pub fn ErrorBanner(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <div
            id="errorMessage"
            class="error-message"
            class:active=move || state.with(|s| s.ui.error.is_shown())
        >
            <span class="error-icon">"⚠"</span>
            <span id="errorText">{move || state.with(|s| s.ui.error_message.clone())}</span>
        </div>
    }
}
