//! ターミナル出力
//!
//! 人が読む形式とJSONの2通り。

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use shop_search_common::{AppState, DetailPanel, Score, SearchResult, SourceCitation, SummaryRow};
use std::fmt;
use std::time::Duration;

/// 区切り線
const RULE: &str = "────────────────────────────────────────";

/// ローディング表示（`hidden` のときは何も描かない）
pub fn spinner(message: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

/// Step1-3
pub fn format_search_result(result: &SearchResult) -> String {
    SearchSteps(result).to_string()
}

/// Step4 のパネル1件
pub fn format_panel(panel: &DetailPanel) -> String {
    PanelBlock(panel).to_string()
}

/// Step5 のサマリー表
pub fn format_summary_table(rows: &[SummaryRow]) -> String {
    SummaryTable(rows).to_string()
}

/// スコア表示（1〜5は星付き）
pub fn badge(score: &Score) -> String {
    match score.level() {
        Some(level) => format!(
            "{} {}{}",
            score,
            "★".repeat(level as usize),
            "☆".repeat(5 - level as usize)
        ),
        None => score.to_string(),
    }
}

struct SearchSteps<'a>(&'a SearchResult);

impl fmt::Display for SearchSteps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Step 1: 入力内容")?;
        writeln!(f, "  検索条件: {}", result.input_text)?;
        writeln!(f, "  モデル:   {}", result.model_name)?;
        writeln!(f, "  プロンプト:")?;
        write_indented(f, &result.prompt_used)?;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Step 2: 初回サーチ結果")?;
        write_indented(f, &result.raw_response)?;
        writeln!(f, "  メタデータ:")?;
        write_indented(f, &result.metadata_pretty())?;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Step 3: 店舗リスト（{}件）", result.shop_list.shops.len())?;
        for (i, shop) in result.shop_list.shops.iter().enumerate() {
            writeln!(f, "  {:>2}. {}", i + 1, shop)?;
        }
        Ok(())
    }
}

struct PanelBlock<'a>(&'a DetailPanel);

impl fmt::Display for PanelBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panel = self.0;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{} {}", panel.glyph(), panel.heading())?;
        if panel.is_collapsed() {
            return Ok(());
        }
        writeln!(f, "  店舗名:       {}", panel.shop_name)?;
        writeln!(f, "  合致度スコア: {}", badge(&panel.score))?;
        writeln!(f, "  判定理由:     {}", panel.reason)?;
        writeln!(f, "  サーチ結果:")?;
        write_indented(f, &panel.detail_text)?;
        if !panel.sources.is_empty() {
            writeln!(f, "  出典:")?;
            for source in &panel.sources {
                writeln!(f, "    - {} <{}>", source.label(), source.url)?;
            }
        }
        Ok(())
    }
}

struct SummaryTable<'a>(&'a [SummaryRow]);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Step 5: サマリー")?;
        writeln!(f, "| 店舗名 | 合致度スコア | 判定理由 |")?;
        writeln!(f, "|---|---|---|")?;
        for row in self.0 {
            writeln!(f, "| {} | {} | {} |", row.shop_name, badge(&row.score), row.reason)?;
        }
        Ok(())
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "    {}", line)?;
    }
    Ok(())
}

/// JSON出力
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub input_text: &'a str,
    pub model_name: &'a str,
    pub shops: &'a [String],
    pub summaries: Vec<JsonSummary<'a>>,
}

#[derive(Serialize)]
pub struct JsonSummary<'a> {
    pub shop_name: &'a str,
    pub score: &'a Score,
    pub reason: &'a str,
    pub detail_search_result: &'a str,
    pub sources: &'a [SourceCitation],
}

impl<'a> JsonOutput<'a> {
    /// 現在の状態から組み立てる（初回サーチ前なら `None`）
    pub fn from_state(state: &'a AppState) -> Option<Self> {
        let current = state.current.as_ref()?;
        Some(Self {
            input_text: &current.input_text,
            model_name: &current.model_name,
            shops: &current.shop_list.shops,
            summaries: state
                .detail
                .panels()
                .iter()
                .map(|p| JsonSummary {
                    shop_name: &p.shop_name,
                    score: &p.score,
                    reason: &p.reason,
                    detail_search_result: &p.detail_text,
                    sources: &p.sources,
                })
                .collect(),
        })
    }
}
