//! 画面の表示フラグ
//!
//! 各領域（ローディング・エラー・結果・個別サーチ）は表示/非表示の2状態のみ。

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn show(&mut self) {
        *self = Visibility::Shown;
    }

    pub fn hide(&mut self) {
        *self = Visibility::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// 画面全体の表示フラグ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: Visibility,
    pub error: Visibility,
    pub error_message: String,
    pub results: Visibility,
    pub detail_loading: Visibility,
    pub detail_results: Visibility,
    /// 検索ボタン無効化（リクエスト中）
    pub search_disabled: bool,
    /// 詳細サーチボタン無効化（リクエスト中）
    pub detail_disabled: bool,
}

impl UiState {
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.error.show();
    }

    pub fn hide_error(&mut self) {
        self.error.hide();
    }

    pub fn is_idle(&self) -> bool {
        !self.search_disabled && !self.detail_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_default_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!UiState::default().loading.is_shown());
    }

    #[test]
    fn test_visibility_show_hide_idempotent() {
        let mut v = Visibility::Hidden;
        v.show();
        v.show();
        assert!(v.is_shown());
        v.hide();
        v.hide();
        assert!(!v.is_shown());
    }

    #[test]
    fn test_show_error_replaces_message() {
        let mut ui = UiState::default();
        ui.show_error("店舗を選択してください");
        ui.show_error("検索エラー: API request failed");
        assert!(ui.error.is_shown());
        assert_eq!(ui.error_message, "検索エラー: API request failed");

        ui.hide_error();
        assert!(!ui.error.is_shown());
    }
}
