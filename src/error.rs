use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopSearchError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// 画面に出した文言そのまま（接頭辞付き）
    #[error("{0}")]
    Flow(String),

    #[error("{0}")]
    Search(#[from] shop_search_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("店舗番号が範囲外です: {index}（1〜{count}）")]
    InvalidSelection { index: usize, count: usize },

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopSearchError>;
