//! Step5: サマリー表

use crate::components::step_box::StepBox;
use leptos::prelude::*;
use shop_search_common::AppState;

#[component]
pub fn SummaryTable(state: RwSignal<AppState>) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            let render_id = s.detail.render_id();
            s.detail
                .rows()
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, row)| (render_id, i, row))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="step5Container"
            class:hidden=move || !state.with(|s| s.ui.detail_results.is_shown())
        >
            <StepBox id="step5" title="Step 5: サマリー">
                <table class="summary-table">
                    <thead>
                        <tr>
                            <th>"店舗名"</th>
                            <th>"合致度スコア"</th>
                            <th>"判定理由"</th>
                        </tr>
                    </thead>
                    <tbody id="summaryTableBody">
                        <For
                            each=rows
                            key=|(render_id, i, _)| (*render_id, *i)
                            children=move |(_, _, row)| {
                                let badge_class = row.score.badge_class();
                                let score = row.score.to_string();
                                view! {
                                    <tr>
                                        <td>{row.shop_name}</td>
                                        <td><span class=badge_class>{score}</span></td>
                                        <td>{row.reason}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </StepBox>
        </div>
    }
}
