//! fetchによるバックエンド呼び出し
//!
//! 同一オリジンの `/api/search` と `/api/search/detail` にJSONをPOSTする。
//! 応答しないリクエストはタイマーと競合させて打ち切る。

use futures::future::{self, Either};
use gloo::console::log;
use gloo::timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_search_common::api::{self, DEFAULT_TIMEOUT_SECS, DETAIL_PATH, SEARCH_PATH};
use shop_search_common::{
    DetailRequest, DetailResult, Error, Result, SearchBackend, SearchRequest, SearchResult,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchを使うバックエンド
#[derive(Debug, Clone, Copy)]
pub struct FetchBackend {
    timeout_secs: u64,
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }
}

impl FetchBackend {
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        log!(format!("[API] Calling POST {}", path));

        let fetch = fetch_json(path, body);
        let timeout = TimeoutFuture::new(timeout_millis(self.timeout_secs));
        futures::pin_mut!(fetch, timeout);

        match future::select(fetch, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(Error::Timeout(self.timeout_secs)),
        }
    }
}

impl SearchBackend for FetchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        self.post_json(SEARCH_PATH, request).await
    }

    async fn detail(&self, request: &DetailRequest) -> Result<DetailResult> {
        self.post_json(DETAIL_PATH, request).await
    }
}

/// タイマー用ミリ秒（u32に収める）
pub fn timeout_millis(secs: u64) -> u32 {
    secs.saturating_mul(1000).min(u32::MAX as u64) as u32
}

async fn fetch_json<Req, Res>(path: &str, body: &Req) -> Result<Res>
where
    Req: Serialize,
    Res: DeserializeOwned,
{
    let body = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("windowが取得できません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    log!(format!("[API] Response status: {}", resp.status()));

    // 失敗時も本文を読んで detail を取り出す
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !resp.ok() {
        return Err(api::api_error(resp.status(), &text));
    }

    Ok(serde_json::from_str(&text)?)
}

/// JS例外を通信エラーに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_js_error_from_string() {
        let error = js_error(JsValue::from_str("Failed to fetch"));
        assert_eq!(error.to_string(), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_js_error_from_error_object() {
        let error = js_error(js_sys::Error::new("NetworkError").into());
        assert_eq!(error.to_string(), "NetworkError");
    }
}
