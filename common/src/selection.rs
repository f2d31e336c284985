//! 店舗チェックリスト（Step3）
//!
//! 選択集合はチェック状態から都度算出し、別に保持しない。

/// チェックリストの1項目
#[derive(Debug, Clone, PartialEq)]
pub struct ShopEntry {
    pub index: usize,
    pub name: String,
    pub checked: bool,
}

impl ShopEntry {
    /// チェックボックスの要素ID（`shop-<index>`）
    pub fn checkbox_id(&self) -> String {
        format!("shop-{}", self.index)
    }
}

/// 店舗チェックリスト
///
/// 描画ごとに世代番号を持ち、古い世代からの変更通知は無視する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopChecklist {
    generation: u64,
    entries: Vec<ShopEntry>,
}

impl ShopChecklist {
    /// 新しい店舗リストで作り直す（全て未チェック）
    pub fn rebuild(&mut self, shops: &[String]) {
        self.generation += 1;
        self.entries = shops
            .iter()
            .enumerate()
            .map(|(index, name)| ShopEntry {
                index,
                name: name.clone(),
                checked: false,
            })
            .collect();
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[ShopEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// チェック状態を更新
    ///
    /// 世代が古い、または範囲外なら何もせず `false`。
    pub fn set_checked(&mut self, generation: u64, index: usize, checked: bool) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    /// チェック済み店舗名（表示順）
    pub fn selected_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| e.name.clone())
            .collect()
    }

    /// 詳細サーチボタンを表示するか
    pub fn detail_trigger_visible(&self) -> bool {
        self.checked_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shops(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rebuild_assigns_ids() {
        let mut list = ShopChecklist::default();
        list.rebuild(&shops(&["店A", "店B"]));

        let ids: Vec<String> = list.entries().iter().map(|e| e.checkbox_id()).collect();
        assert_eq!(ids, vec!["shop-0", "shop-1"]);
        assert_eq!(list.checked_count(), 0);
        assert!(!list.detail_trigger_visible());
    }

    #[test]
    fn test_check_then_uncheck_hides_trigger() {
        let mut list = ShopChecklist::default();
        list.rebuild(&shops(&["店A", "店B"]));
        let generation = list.generation();

        assert!(list.set_checked(generation, 0, true));
        assert!(list.detail_trigger_visible());
        assert_eq!(list.selected_names(), vec!["店A"]);

        assert!(list.set_checked(generation, 0, false));
        assert!(!list.detail_trigger_visible());
        assert!(list.selected_names().is_empty());
    }

    #[test]
    fn test_stale_generation_ignored() {
        let mut list = ShopChecklist::default();
        list.rebuild(&shops(&["店A"]));
        let stale = list.generation();
        list.rebuild(&shops(&["店C", "店D"]));

        assert!(!list.set_checked(stale, 0, true));
        assert_eq!(list.checked_count(), 0);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut list = ShopChecklist::default();
        list.rebuild(&shops(&["店A"]));
        assert!(!list.set_checked(list.generation(), 3, true));
    }

    #[test]
    fn test_selected_names_keep_display_order() {
        let mut list = ShopChecklist::default();
        list.rebuild(&shops(&["店A", "店B", "店C"]));
        let generation = list.generation();
        list.set_checked(generation, 2, true);
        list.set_checked(generation, 0, true);
        assert_eq!(list.selected_names(), vec!["店A", "店C"]);
    }
}
