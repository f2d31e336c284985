//! ヘッダー（タイトルと進行段階）

use leptos::prelude::*;
use shop_search_common::{AppState, Phase};

#[component]
pub fn Header(state: RwSignal<AppState>) -> impl IntoView {
    let phase = Signal::derive(move || state.with(|s| s.phase()));

    view! {
        <header class="header">
            <h1>"飲食店サーチ - Grounding Search 検証"</h1>
            <p class="subtitle">"条件に合う店舗を洗い出し、選んだ店舗を個別に調べて合致度を判定します"</p>
            <ol class="phase-list">
                {Phase::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let p = *p;
                        view! {
                            <li class="phase" class:current=move || phase.get() == p>
                                {format!("{}. {}", i + 1, p.label())}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </header>
    }
}
