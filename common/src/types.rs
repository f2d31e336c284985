//! APIの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SearchRequest / SearchResult: Step1-3（初回サーチと店舗リスト）
//! - DetailRequest / DetailResult: Step4-5（個別店舗サーチと合致度判定）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 初回サーチのリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub input_text: String,
}

/// 個別店舗サーチのリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRequest {
    pub input_text: String,
    pub shop_names: Vec<String>,
}

/// 抽出された店舗リスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopList {
    #[serde(default)]
    pub shops: Vec<String>,
}

/// 初回サーチ結果（Step1-3）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub input_text: String,
    pub prompt_used: String,
    pub model_name: String,
    pub raw_response: String,

    #[serde(default)]
    pub grounding_metadata: Option<serde_json::Value>,

    pub shop_list: ShopList,
}

impl SearchResult {
    /// Grounding メタデータを2スペースインデントで整形（未設定なら "null"）
    pub fn metadata_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.grounding_metadata)
            .unwrap_or_else(|_| "null".to_string())
    }
}

/// 合致度スコア
///
/// サーバーは数値を返すが、文字列で返ってきてもそのまま表示する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(serde_json::Number),
    Text(String),
}

impl Score {
    /// 1〜5の段階値（色分け用）
    pub fn level(&self) -> Option<u8> {
        let value = match self {
            Score::Number(n) => n.as_i64()?,
            Score::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        (1..=5).contains(&value).then_some(value as u8)
    }

    /// スコアバッジのCSSクラス
    pub fn badge_class(&self) -> String {
        format!("score-badge score-{}", self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => f.write_str(s),
        }
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Score::Number(value.into())
    }
}

/// 合致度判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgement {
    #[serde(default)]
    pub shop_name: String,
    pub score: Score,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub search_result: String,
}

/// 個別サーチの出典
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl SourceCitation {
    /// リンク表示名（タイトルがなければURL）
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.url,
        }
    }
}

/// 1店舗分のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSummary {
    pub shop_name: String,
    #[serde(default)]
    pub detail_search_result: String,
    pub judgement: Judgement,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
}

/// 個別店舗サーチ結果（Step4-5）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailResult {
    #[serde(default)]
    pub input_text: String,
    #[serde(default)]
    pub shop_names: Vec<String>,
    pub summaries: Vec<ShopSummary>,
}

/// ヘルスチェック応答
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub model: String,
}
