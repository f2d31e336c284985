//! メインアプリケーションコンポーネント
//!
//! 状態は `AppState`（共通ライブラリ）を1つのシグナルに持ち、
//! 開始・完了の遷移はすべてそちらに委ねる。

use crate::api::FetchBackend;
use crate::components::{
    detail_panels::DetailPanels,
    error_banner::ErrorBanner,
    header::Header,
    loading::Loading,
    search_form::SearchForm,
    shop_selection::ShopSelection,
    step_results::StepResults,
    summary_table::SummaryTable,
};
use gloo::console::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_search_common::{AppState, SearchBackend};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::default());
    let (query, set_query) = signal(String::new());
    let backend = FetchBackend::default();

    // 初回サーチ
    let on_search = move |_: ()| {
        let raw = query.get_untracked();
        log!("[Search] Button clicked");

        let mut begun = None;
        state.update(|s| begun = Some(s.begin_search(&raw)));
        let request = match begun {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                error!(format!("[Search] Not started: {}", e));
                return;
            }
            None => return,
        };

        log!(format!("[Search] Input text: {}", request.input_text));
        spawn_local(async move {
            let outcome = backend.search(&request).await;
            match &outcome {
                Ok(result) => log!(format!(
                    "[Display] Rendering results: {} shops",
                    result.shop_list.shops.len()
                )),
                Err(e) => error!(format!("[Search] Error: {}", e)),
            }
            state.update(|s| s.complete_search(outcome));
        });
    };

    // 個別店舗サーチ
    let on_detail_search = move |_: ()| {
        log!("[Detail Search] Button clicked");

        let mut begun = None;
        state.update(|s| begun = Some(s.begin_detail()));
        let request = match begun {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                error!(format!("[Detail Search] Not started: {}", e));
                return;
            }
            None => return,
        };

        log!(format!("[Detail Search] Selected shops: {:?}", request.shop_names));
        spawn_local(async move {
            let outcome = backend.detail(&request).await;
            match &outcome {
                Ok(result) => log!(format!(
                    "[Display] Rendering detail results: {} shops",
                    result.summaries.len()
                )),
                Err(e) => error!(format!("[Detail Search] Error: {}", e)),
            }
            state.update(|s| s.complete_detail(outcome));
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.ui.loading.is_shown()));
    let detail_loading = Signal::derive(move || state.with(|s| s.ui.detail_loading.is_shown()));

    view! {
        <div class="container">
            <Header state=state />

            <SearchForm
                state=state
                query=query
                set_query=set_query
                on_search=on_search
            />

            <Loading id="loading" message="検索中... しばらくお待ちください" active=loading />

            <ErrorBanner state=state />

            <section
                id="resultsSection"
                class="results-section"
                class:hidden=move || !state.with(|s| s.ui.results.is_shown())
            >
                <StepResults state=state />

                <ShopSelection state=state on_detail_search=on_detail_search />

                <Loading
                    id="detailLoading"
                    message="選択した店舗を個別サーチ中..."
                    active=detail_loading
                />

                <DetailPanels state=state />

                <SummaryTable state=state />
            </section>
        </div>
    }
}
