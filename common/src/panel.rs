//! 個別サーチ結果の表示モデル（Step4パネル / Step5サマリー表）

use crate::types::{DetailResult, Score, SourceCitation};

/// 展開中のアイコン
pub const EXPANDED_GLYPH: &str = "▼";

/// 折りたたみ中のアイコン
pub const COLLAPSED_GLYPH: &str = "▶";

/// 折りたたみ可能な店舗パネル
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub index: usize,
    pub shop_name: String,
    pub detail_text: String,
    pub score: Score,
    pub reason: String,
    pub sources: Vec<SourceCitation>,
    collapsed: bool,
}

impl DetailPanel {
    pub fn content_id(&self) -> String {
        format!("step4-{}-content", self.index)
    }

    pub fn icon_id(&self) -> String {
        format!("step4-{}-icon", self.index)
    }

    pub fn heading(&self) -> String {
        format!("Step 4-{}: {} の詳細サーチ結果", self.index + 1, self.shop_name)
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn glyph(&self) -> &'static str {
        if self.collapsed {
            COLLAPSED_GLYPH
        } else {
            EXPANDED_GLYPH
        }
    }
}

/// サマリー表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub shop_name: String,
    pub score: Score,
    pub reason: String,
}

/// 個別サーチの描画内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    render_id: u64,
    panels: Vec<DetailPanel>,
    rows: Vec<SummaryRow>,
}

impl DetailView {
    /// レスポンスからパネルと表を作り直す（パネルは全て展開状態）
    pub fn render(&mut self, result: &DetailResult) {
        self.render_id += 1;
        self.panels = result
            .summaries
            .iter()
            .enumerate()
            .map(|(index, s)| DetailPanel {
                index,
                shop_name: s.shop_name.clone(),
                detail_text: s.detail_search_result.clone(),
                score: s.judgement.score.clone(),
                reason: s.judgement.reason.clone(),
                sources: s.sources.clone(),
                collapsed: false,
            })
            .collect();
        self.rows = result
            .summaries
            .iter()
            .map(|s| SummaryRow {
                shop_name: s.shop_name.clone(),
                score: s.judgement.score.clone(),
                reason: s.judgement.reason.clone(),
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.rows.clear();
    }

    /// 描画ごとに変わる番号（リスト描画のキー用）
    pub fn render_id(&self) -> u64 {
        self.render_id
    }

    pub fn panels(&self) -> &[DetailPanel] {
        &self.panels
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn panel(&self, index: usize) -> Option<&DetailPanel> {
        self.panels.get(index)
    }

    /// パネルの開閉を切り替え、切り替え後に折りたたまれているかを返す
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let panel = self.panels.get_mut(index)?;
        panel.toggle();
        Some(panel.is_collapsed())
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
