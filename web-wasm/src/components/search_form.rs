//! 検索フォームコンポーネント

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use shop_search_common::AppState;

#[component]
pub fn SearchForm<F>(
    state: RwSignal<AppState>,
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_searching = move || state.with(|s| s.ui.search_disabled);

    view! {
        <div class="search-form">
            <label for="searchInput">"検索条件"</label>
            <textarea
                id="searchInput"
                rows="3"
                placeholder="例: 渋谷 ラーメン 深夜営業"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
                on:keydown={
                    let on_search = on_search.clone();
                    move |ev: KeyboardEvent| {
                        // 変換確定のEnterは検索しない
                        if ev.key() == "Enter" && !ev.shift_key() && !ev.is_composing() {
                            ev.prevent_default();
                            on_search(());
                        }
                    }
                }
            ></textarea>
            <button
                id="searchButton"
                class="btn btn-primary"
                disabled=is_searching
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(())
                }
            >
                {move || if is_searching() { "検索中..." } else { "検索" }}
            </button>
        </div>
    }
}
