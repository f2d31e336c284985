//! ターミナル出力と店舗番号指定のテスト

use serde_json::json;
use shop_search::error::ShopSearchError;
use shop_search::prompt::resolve_selection;
use shop_search::render::{self, JsonOutput};
use shop_search_common::{AppState, DetailResult, Score, SearchResult};

fn search_result() -> SearchResult {
    serde_json::from_value(json!({
        "input_text": "渋谷 ラーメン",
        "prompt_used": "「渋谷 ラーメン」に合う飲食店を10件リストアップしてください。",
        "model_name": "gemini-2.0-flash",
        "raw_response": "1. 店A\n2. 店B",
        "grounding_metadata": null,
        "shop_list": { "shops": ["店A", "店B"] }
    }))
    .unwrap()
}

fn detail_result() -> DetailResult {
    serde_json::from_value(json!({
        "summaries": [
            {
                "shop_name": "店A",
                "detail_search_result": "深夜2時まで営業",
                "judgement": { "score": 5, "reason": "条件にすべて合致" },
                "sources": [{ "url": "https://tabelog.com/a" }]
            },
            {
                "shop_name": "店B",
                "detail_search_result": "21時閉店",
                "judgement": { "score": "2", "reason": "営業時間が合わない" }
            }
        ]
    }))
    .unwrap()
}

fn state_with_detail() -> AppState {
    let mut state = AppState::default();
    state.begin_search("渋谷 ラーメン").unwrap();
    state.complete_search(Ok(search_result()));
    let generation = state.checklist.generation();
    state.set_shop_checked(generation, 0, true);
    state.set_shop_checked(generation, 1, true);
    state.begin_detail().unwrap();
    state.complete_detail(Ok(detail_result()));
    state
}

#[test]
fn test_format_search_result_lists_shops() {
    let text = render::format_search_result(&search_result());
    assert!(text.contains("Step 1: 入力内容"));
    assert!(text.contains("gemini-2.0-flash"));
    assert!(text.contains("Step 3: 店舗リスト（2件）"));
    assert!(text.contains(" 1. 店A"));
    assert!(text.contains(" 2. 店B"));
    assert!(text.contains("null"));
}

#[test]
fn test_format_panel_expanded_and_collapsed() {
    let mut state = state_with_detail();

    let expanded = render::format_panel(&state.detail.panels()[0]);
    assert!(expanded.contains("▼ Step 4-1: 店A の詳細サーチ結果"));
    assert!(expanded.contains("深夜2時まで営業"));
    assert!(expanded.contains("https://tabelog.com/a"));

    state.toggle_panel(0);
    let collapsed = render::format_panel(&state.detail.panels()[0]);
    assert!(collapsed.contains("▶ Step 4-1"));
    assert!(!collapsed.contains("深夜2時まで営業"));
}

#[test]
fn test_summary_table_one_row_per_summary() {
    let state = state_with_detail();
    let table = render::format_summary_table(state.detail.rows());

    let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("| 店") && !l.starts_with("| 店舗名")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("店A") && rows[0].contains("5 ★★★★★") && rows[0].contains("条件にすべて合致"));
    assert!(rows[1].contains("店B") && rows[1].contains("2 ★★☆☆☆"));
}

#[test]
fn test_multiline_text_is_indented() {
    let text = render::format_search_result(&search_result());
    let lines: Vec<&str> = text.lines().collect();
    let step2 = lines.iter().position(|l| *l == "Step 2: 初回サーチ結果").expect("no step 2");
    assert_eq!(lines[step2 + 1], "    1. 店A");
    assert_eq!(lines[step2 + 2], "    2. 店B");
    assert_eq!(lines[step2 + 3], "  メタデータ:");
    assert_eq!(lines[step2 + 4], "    null");
    assert!(text.ends_with(" 2. 店B\n"));

    let state = state_with_detail();
    let panel = render::format_panel(&state.detail.panels()[0]);
    assert!(panel.contains("  出典:\n    - https://tabelog.com/a <https://tabelog.com/a>\n"));
}

#[test]
fn test_badge_without_level() {
    assert_eq!(render::badge(&Score::Text("不明".into())), "不明");
}

#[test]
fn test_json_output() {
    let state = state_with_detail();
    let output = JsonOutput::from_state(&state).expect("no current result");
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["input_text"], "渋谷 ラーメン");
    assert_eq!(value["shops"], json!(["店A", "店B"]));
    assert_eq!(value["summaries"][0]["score"], json!(5));
    assert_eq!(value["summaries"][1]["score"], json!("2"));
    assert_eq!(value["summaries"][0]["sources"][0]["url"], "https://tabelog.com/a");
}

#[test]
fn test_json_output_requires_search() {
    assert!(JsonOutput::from_state(&AppState::default()).is_none());
}

#[test]
fn test_resolve_selection() {
    assert_eq!(resolve_selection(&[], false, 3).unwrap(), None);
    assert_eq!(resolve_selection(&[], true, 3).unwrap(), Some(vec![0, 1, 2]));
    assert_eq!(resolve_selection(&[3, 1, 3], false, 3).unwrap(), Some(vec![2, 0]));

    assert!(matches!(
        resolve_selection(&[0], false, 3),
        Err(ShopSearchError::InvalidSelection { index: 0, count: 3 })
    ));
    assert!(matches!(
        resolve_selection(&[4], false, 3),
        Err(ShopSearchError::InvalidSelection { index: 4, count: 3 })
    ));
}
