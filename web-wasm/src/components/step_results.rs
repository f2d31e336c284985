//! Step1（入力）・Step2（初回サーチ結果）の表示

use crate::components::step_box::StepBox;
use leptos::prelude::*;
use shop_search_common::{AppState, SearchResult};

/// 現在の検索結果から1項目を取り出すリアクティブな値
fn current_field(
    state: RwSignal<AppState>,
    field: fn(&SearchResult) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.current.as_ref().map(field).unwrap_or_default())
}

#[component]
pub fn StepResults(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <StepBox id="step1" title="Step 1: 入力内容">
            <div class="info-grid">
                <div class="info-label">"検索条件:"</div>
                <div class="info-value" id="step1InputText">
                    {current_field(state, |c| c.input_text.clone())}
                </div>

                <div class="info-label">"プロンプト:"</div>
                <div class="info-value">
                    <pre class="text-box" id="step1Prompt">
                        {current_field(state, |c| c.prompt_used.clone())}
                    </pre>
                </div>

                <div class="info-label">"モデル:"</div>
                <div class="info-value" id="step1Model">
                    {current_field(state, |c| c.model_name.clone())}
                </div>
            </div>
        </StepBox>

        <StepBox id="step2" title="Step 2: 初回サーチ結果">
            <div class="info-grid">
                <div class="info-label">"レスポンス:"</div>
                <div class="info-value">
                    <pre class="text-box" id="step2RawResponse">
                        {current_field(state, |c| c.raw_response.clone())}
                    </pre>
                </div>

                <div class="info-label">"メタデータ:"</div>
                <div class="info-value">
                    <pre class="text-box" id="step2Metadata">
                        {current_field(state, SearchResult::metadata_pretty)}
                    </pre>
                </div>
            </div>
        </StepBox>
    }
}
