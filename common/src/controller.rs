//! 検索フローの状態遷移
//!
//! - Search Controller: 入力検証 → 初回サーチ → Step1-3描画
//! - Detail Controller: 店舗選択 → 個別サーチ → Step4-5描画
//!
//! `begin_*` でリクエストを組み立てて画面をリクエスト中にし、
//! `complete_*` で結果を反映して必ず待機状態へ戻す。
//! UIフレームワークに依存しないため、Web（Leptos）とCLIの両方から使う。

use crate::api::SearchBackend;
use crate::error::{Error, Result};
use crate::panel::DetailView;
use crate::selection::ShopChecklist;
use crate::types::{DetailRequest, DetailResult, SearchRequest, SearchResult};
use crate::ui_state::UiState;

/// フロー種別（エラー表示の接頭辞を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Search,
    Detail,
}

impl Flow {
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Flow::Search => "検索エラー",
            Flow::Detail => "個別店舗検索エラー",
        }
    }

    /// 画面に出すエラー文言（入力検証エラーは接頭辞なし）
    pub fn error_text(&self, error: &Error) -> String {
        if error.is_validation() {
            error.to_string()
        } else {
            format!("{}: {}", self.error_prefix(), error)
        }
    }
}

/// 画面上の進行段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 検索条件の入力
    Query,
    /// 店舗の選択
    Select,
    /// 個別サーチ結果の確認
    Review,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Query, Phase::Select, Phase::Review];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Query => "検索条件",
            Phase::Select => "店舗選択",
            Phase::Review => "個別サーチ結果",
        }
    }
}

/// 入力文字列を前後空白除去して検証
pub fn normalize_query(raw: &str) -> Result<String> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }
    Ok(query.to_string())
}

/// アプリケーションの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub ui: UiState,
    /// 直近の初回サーチ結果（次の検索成功で上書き）
    pub current: Option<SearchResult>,
    pub checklist: ShopChecklist,
    pub detail: DetailView,
    /// 初回サーチの開始回数
    search_epoch: u64,
    /// リクエスト中の個別サーチが属する初回サーチ
    detail_epoch: Option<u64>,
}

impl AppState {
    /// 初回サーチ開始
    ///
    /// 入力が空ならエラーを表示して `Err`。リクエスト中の再実行は
    /// 画面を変えずに `Err(Error::Busy)`。
    pub fn begin_search(&mut self, raw_query: &str) -> Result<SearchRequest> {
        if self.ui.search_disabled {
            return Err(Error::Busy);
        }
        let input_text = match normalize_query(raw_query) {
            Ok(q) => q,
            Err(e) => {
                self.ui.show_error(Flow::Search.error_text(&e));
                return Err(e);
            }
        };

        self.search_epoch += 1;
        self.ui.hide_error();
        self.ui.results.hide();
        self.ui.loading.show();
        self.ui.search_disabled = true;

        Ok(SearchRequest { input_text })
    }

    /// 初回サーチ完了（成功・失敗とも）
    pub fn complete_search(&mut self, outcome: Result<SearchResult>) {
        match outcome {
            Ok(result) => {
                self.checklist.rebuild(&result.shop_list.shops);
                self.detail.clear();
                self.ui.detail_results.hide();
                self.current = Some(result);
                self.ui.results.show();
            }
            Err(e) => {
                self.ui.show_error(Flow::Search.error_text(&e));
            }
        }

        self.ui.loading.hide();
        self.ui.search_disabled = false;
    }

    /// チェックボックスの変更
    pub fn set_shop_checked(&mut self, generation: u64, index: usize, checked: bool) -> bool {
        self.checklist.set_checked(generation, index, checked)
    }

    pub fn detail_trigger_visible(&self) -> bool {
        self.checklist.detail_trigger_visible()
    }

    /// 個別サーチ開始
    pub fn begin_detail(&mut self) -> Result<DetailRequest> {
        if self.ui.detail_disabled {
            return Err(Error::Busy);
        }

        let shop_names = self.checklist.selected_names();
        let checked = if shop_names.is_empty() {
            Err(Error::NoSelection)
        } else {
            self.current
                .as_ref()
                .map(|c| c.input_text.clone())
                .ok_or(Error::NoCurrentResult)
        };
        let input_text = match checked {
            Ok(text) => text,
            Err(e) => {
                self.ui.show_error(Flow::Detail.error_text(&e));
                return Err(e);
            }
        };

        self.ui.hide_error();
        self.detail.clear();
        self.ui.detail_results.hide();
        self.ui.detail_loading.show();
        self.ui.detail_disabled = true;
        self.detail_epoch = Some(self.search_epoch);

        Ok(DetailRequest {
            input_text,
            shop_names,
        })
    }

    /// 個別サーチ完了（成功・失敗とも）
    ///
    /// 開始後に新しい初回サーチが始まっていた場合、結果もエラーも破棄する。
    pub fn complete_detail(&mut self, outcome: Result<DetailResult>) {
        let stale = self.detail_epoch.take() != Some(self.search_epoch);
        match outcome {
            _ if stale => {}
            Ok(result) => {
                self.detail.render(&result);
                self.ui.detail_results.show();
            }
            Err(e) => {
                self.ui.show_error(Flow::Detail.error_text(&e));
            }
        }

        self.ui.detail_loading.hide();
        self.ui.detail_disabled = false;
    }

    pub fn phase(&self) -> Phase {
        if !self.ui.results.is_shown() {
            Phase::Query
        } else if self.ui.detail_results.is_shown() {
            Phase::Review
        } else {
            Phase::Select
        }
    }

    /// パネルの開閉
    pub fn toggle_panel(&mut self, index: usize) -> Option<bool> {
        self.detail.toggle(index)
    }

    /// 初回サーチを一括実行
    ///
    /// 入力検証で止まった場合はバックエンドを呼ばない。
    pub async fn run_search<B: SearchBackend>(&mut self, backend: &B, raw_query: &str) -> bool {
        let request = match self.begin_search(raw_query) {
            Ok(r) => r,
            Err(_) => return false,
        };
        let outcome = backend.search(&request).await;
        let ok = outcome.is_ok();
        self.complete_search(outcome);
        ok
    }

    /// 個別サーチを一括実行
    pub async fn run_detail<B: SearchBackend>(&mut self, backend: &B) -> bool {
        let request = match self.begin_detail() {
            Ok(r) => r,
            Err(_) => return false,
        };
        let outcome = backend.detail(&request).await;
        let ok = outcome.is_ok();
        self.complete_detail(outcome);
        ok
    }
}
