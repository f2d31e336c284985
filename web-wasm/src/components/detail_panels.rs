//! Step4: 店舗ごとの詳細サーチ結果パネル

use gloo::console::log;
use leptos::prelude::*;
use shop_search_common::panel::EXPANDED_GLYPH;
use shop_search_common::{AppState, DetailPanel};

#[component]
pub fn DetailPanels(state: RwSignal<AppState>) -> impl IntoView {
    let panels = move || {
        state.with(|s| {
            let render_id = s.detail.render_id();
            s.detail
                .panels()
                .iter()
                .map(|p| (render_id, p.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="step4Container"
            class="step4-container"
            class:hidden=move || !state.with(|s| s.ui.detail_results.is_shown())
        >
            <For
                each=panels
                key=|(render_id, panel)| (*render_id, panel.index)
                children=move |(_, panel)| view! { <PanelBox state=state panel=panel /> }
            />
        </div>
    }
}

#[component]
fn PanelBox(state: RwSignal<AppState>, panel: DetailPanel) -> impl IntoView {
    let index = panel.index;
    let content_id = panel.content_id();
    let icon_id = panel.icon_id();
    let heading = panel.heading();
    let badge_class = panel.score.badge_class();
    let score = panel.score.to_string();

    let is_collapsed = move || {
        state.with(|s| s.detail.panel(index).is_some_and(|p| p.is_collapsed()))
    };
    let glyph = move || {
        state.with(|s| s.detail.panel(index).map_or(EXPANDED_GLYPH, |p| p.glyph()))
    };

    let on_toggle = {
        let content_id = content_id.clone();
        move |_: leptos::ev::MouseEvent| {
            state.update(|s| {
                s.toggle_panel(index);
            });
            log!(format!("[UI] Toggled collapse: {}", content_id));
        }
    };

    let sources = (!panel.sources.is_empty()).then(|| {
        let links = panel
            .sources
            .iter()
            .map(|source| {
                view! {
                    <li>
                        <a href=source.url.clone() target="_blank" rel="noopener noreferrer">
                            {source.label().to_string()}
                        </a>
                    </li>
                }
            })
            .collect_view();
        view! {
            <div class="info-label">"出典:"</div>
            <div class="info-value">
                <ul class="source-list">{links}</ul>
            </div>
        }
    });

    view! {
        <div class="step-box">
            <div class="step-header" on:click=on_toggle>
                <span class="collapse-icon" id=icon_id>{glyph}</span>
                <h3>{heading}</h3>
            </div>
            <div class="step-content" id=content_id class:collapsed=is_collapsed>
                <div class="info-grid">
                    <div class="info-label">"店舗名:"</div>
                    <div class="info-value">{panel.shop_name}</div>

                    <div class="info-label">"サーチ結果:"</div>
                    <div class="info-value">
                        <div class="text-box">{panel.detail_text}</div>
                    </div>

                    <div class="info-label">"合致度スコア:"</div>
                    <div class="info-value">
                        <span class=badge_class>{score}</span>
                    </div>

                    <div class="info-label">"判定理由:"</div>
                    <div class="info-value">{panel.reason}</div>

                    {sources}
                </div>
            </div>
        </div>
    }
}
