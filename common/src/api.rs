//! REST APIの契約
//!
//! エンドポイント・失敗レスポンスの解釈・バックエンド抽象。
//! HTTPの実装はCLI（reqwest）とWeb（fetch）それぞれが持つ。

use crate::error::{Error, Result};
use crate::types::{DetailRequest, DetailResult, SearchRequest, SearchResult};
use serde::Deserialize;

/// 初回サーチ
pub const SEARCH_PATH: &str = "/api/search";

/// 個別店舗サーチ
pub const DETAIL_PATH: &str = "/api/search/detail";

/// ヘルスチェック
pub const HEALTH_PATH: &str = "/health";

/// サーバーからメッセージが得られない場合の文言
pub const GENERIC_ERROR_MESSAGE: &str = "API request failed";

/// リクエストタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// 失敗レスポンスの本文からメッセージを取り出す
///
/// `{"detail": "..."}` 形式の文字列のみ採用し、それ以外
/// （JSONでない、detailが配列、空文字など）は汎用メッセージ。
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

/// 非成功ステータスのレスポンスをエラーに変換
pub fn api_error(status: u16, body: &str) -> Error {
    Error::Api {
        status,
        message: error_message(body),
    }
}

/// ベースURLとパスを結合（末尾スラッシュの重複を避ける）
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// 検索バックエンド
///
/// 2つのエンドポイントを呼ぶだけの抽象。テストでは記録用の実装に差し替える。
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult>;

    async fn detail(&self, request: &DetailRequest) -> Result<DetailResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_detail_string() {
        let body = r#"{"detail": "Search failed: 429 Resource exhausted"}"#;
        assert_eq!(error_message(body), "Search failed: 429 Resource exhausted");
    }

    #[test]
    fn test_error_message_fallbacks() {
        // FastAPIのバリデーションエラーは配列で返る
        let validation = r#"{"detail": [{"loc": ["body", "input_text"], "msg": "field required"}]}"#;
        assert_eq!(error_message(validation), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"detail": ""}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"message": "oops"}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message("<html>Bad Gateway</html>"), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(""), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_api_error_keeps_status() {
        let error = api_error(502, "not json");
        match error {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, GENERIC_ERROR_MESSAGE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:8000", SEARCH_PATH), "http://localhost:8000/api/search");
        assert_eq!(join_url("http://localhost:8000/", DETAIL_PATH), "http://localhost:8000/api/search/detail");
        assert_eq!(join_url("", HEALTH_PATH), "/health");
    }
}
