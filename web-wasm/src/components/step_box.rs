//! 折りたたみ可能なステップ枠

use leptos::prelude::*;
use shop_search_common::panel::{COLLAPSED_GLYPH, EXPANDED_GLYPH};

/// Step1〜3, 5 の固定枠（`<id>Content` / `<id>Icon`）
#[component]
pub fn StepBox(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let content_id = format!("{}Content", id);
    let icon_id = format!("{}Icon", id);

    view! {
        <div class="step-box">
            <div class="step-header" on:click=move |_| set_collapsed.update(|c| *c = !*c)>
                <span class="collapse-icon" id=icon_id>
                    {move || if collapsed.get() { COLLAPSED_GLYPH } else { EXPANDED_GLYPH }}
                </span>
                <h2>{title}</h2>
            </div>
            <div class="step-content" id=content_id class:collapsed=move || collapsed.get()>
                {children()}
            </div>
        </div>
    }
}
