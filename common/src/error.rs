//! エラー型定義
//!
//! 入力検証エラー（ネットワークに到達しない）とリクエストエラー
//! （HTTPステータス・通信失敗・タイムアウト・レスポンス解析失敗）の2種類。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("検索条件を入力してください")]
    EmptyQuery,

    #[error("店舗を選択してください")]
    NoSelection,

    #[error("先に検索を実行してください")]
    NoCurrentResult,

    #[error("処理中です")]
    Busy,

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("リクエストがタイムアウトしました（{0}秒）")]
    Timeout(u64),

    #[error("レスポンスの解析に失敗: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// ローカルで検出される入力検証エラーか
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyQuery | Error::NoSelection | Error::NoCurrentResult)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        assert_eq!(Error::EmptyQuery.to_string(), "検索条件を入力してください");
        assert_eq!(Error::NoSelection.to_string(), "店舗を選択してください");
    }

    #[test]
    fn test_error_display_api_uses_server_message() {
        let error = Error::Api {
            status: 500,
            message: "Search failed: quota exceeded".to_string(),
        };
        assert_eq!(error.to_string(), "Search failed: quota exceeded");
    }

    #[test]
    fn test_error_display_timeout() {
        let display = Error::Timeout(120).to_string();
        assert!(display.contains("タイムアウト"));
        assert!(display.contains("120"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().starts_with("レスポンスの解析に失敗"));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::EmptyQuery.is_validation());
        assert!(Error::NoSelection.is_validation());
        assert!(Error::NoCurrentResult.is_validation());
        assert!(!Error::Busy.is_validation());
        assert!(!Error::Network("offline".into()).is_validation());
        assert!(!Error::Timeout(1).is_validation());
    }
}
