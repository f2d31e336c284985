//! Step3: 店舗チェックリストと詳細サーチボタン

use crate::components::step_box::StepBox;
use gloo::console::log;
use leptos::prelude::*;
use shop_search_common::{AppState, ShopEntry};

#[component]
pub fn ShopSelection<F>(state: RwSignal<AppState>, on_detail_search: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    // 描画世代をキーに含め、再検索で前回のチェックボックスを残さない
    let entries = move || {
        state.with(|s| {
            let generation = s.checklist.generation();
            s.checklist
                .entries()
                .iter()
                .map(|e| (generation, e.clone()))
                .collect::<Vec<_>>()
        })
    };
    let shop_count = move || state.with(|s| s.checklist.len());

    view! {
        <StepBox id="step3" title="Step 3: 店舗リスト">
            <p class="text-muted">{move || format!("{}件の店舗が見つかりました", shop_count())}</p>
            <ul id="shopList" class="shop-list">
                <For
                    each=entries
                    key=|(generation, entry)| (*generation, entry.index)
                    children=move |(generation, entry)| {
                        view! { <ShopItem state=state generation=generation entry=entry /> }
                    }
                />
            </ul>
            <button
                id="detailSearchButton"
                class="btn btn-primary"
                class:hidden=move || !state.with(|s| s.detail_trigger_visible())
                disabled=move || state.with(|s| s.ui.detail_disabled)
                on:click={
                    let on_detail_search = on_detail_search.clone();
                    move |_| on_detail_search(())
                }
            >
                "選択した店舗を個別サーチ"
            </button>
        </StepBox>
    }
}

#[component]
fn ShopItem(state: RwSignal<AppState>, generation: u64, entry: ShopEntry) -> impl IntoView {
    let index = entry.index;
    let checkbox_id = entry.checkbox_id();
    let is_checked = move || {
        state.with(|s| {
            s.checklist.generation() == generation
                && s.checklist.entries().get(index).is_some_and(|e| e.checked)
        })
    };

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        state.update(|s| {
            s.set_shop_checked(generation, index, checked);
        });

        let count = state.with_untracked(|s| s.checklist.checked_count());
        if count > 0 {
            log!(format!("[UI] Detail search button shown: {} shops selected", count));
        } else {
            log!("[UI] Detail search button hidden: no shops selected");
        }
    };

    view! {
        <li class="shop-item">
            <input
                type="checkbox"
                id=checkbox_id.clone()
                value=entry.name.clone()
                prop:checked=is_checked
                on:change=on_change
            />
            <label for=checkbox_id>{entry.name}</label>
        </li>
    }
}
