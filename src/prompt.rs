//! 対話入力（検索条件・店舗選択）

use crate::error::{Result, ShopSearchError};
use dialoguer::{Input, MultiSelect};
use shop_search_common::ShopEntry;

/// 検索条件を対話入力
///
/// 空入力もそのまま返し、検証は検索フロー側で行う。
pub fn prompt_query() -> Result<String> {
    let query: String = Input::new()
        .with_prompt("検索条件")
        .allow_empty(true)
        .interact_text()?;
    Ok(query)
}

/// 個別サーチする店舗を対話選択（0始まりの番号）
pub fn prompt_shops(entries: &[ShopEntry]) -> Result<Vec<usize>> {
    let items: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let selected = MultiSelect::new()
        .with_prompt("個別サーチする店舗を選択（Spaceで選択 / Enterで確定）")
        .items(&items)
        .interact()?;
    Ok(selected)
}

/// コマンドライン指定の店舗番号を解決
///
/// `--all` なら全件、番号指定（1始まり）なら0始まりに変換、
/// どちらもなければ `None`（対話選択へ）。
pub fn resolve_selection(select: &[usize], all: bool, count: usize) -> Result<Option<Vec<usize>>> {
    if all {
        return Ok(Some((0..count).collect()));
    }
    if select.is_empty() {
        return Ok(None);
    }

    let mut indices = Vec::with_capacity(select.len());
    for &number in select {
        if number == 0 || number > count {
            return Err(ShopSearchError::InvalidSelection { index: number, count });
        }
        let index = number - 1;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    Ok(Some(indices))
}
