//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loading(
    #[prop(into)] id: String,
    #[prop(into)] message: String,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <div id=id class="loading" class:active=move || active.get()>
            <div class="spinner"></div>
            <p class="loading-text">{message}</p>
        </div>
    }
}
