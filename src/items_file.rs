//! 項目JSONファイルの読み込み
//!
//! JSON配列（Itemのリスト）をストアに変換する。保存は行わない。

use crate::error::Result;
use shopping_list_core::{Item, ItemStore};
use std::path::Path;

/// JSONファイルからストアを構築
pub fn load_store(path: &Path) -> Result<ItemStore> {
    let content = std::fs::read_to_string(path)?;
    let store = parse_store(&content)?;
    tracing::debug!(path = %path.display(), items = store.len(), "loaded items file");
    Ok(store)
}

/// JSON文字列からストアを構築
pub fn parse_store(json: &str) -> Result<ItemStore> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    Ok(ItemStore::with_items(items)?)
}

/// 起動時のストアを決定
///
/// ファイル指定があればそれを読み、なければデモ商品か空のストア。
pub fn initial_store(items: Option<&Path>, load_sample: bool) -> Result<ItemStore> {
    match items {
        Some(path) => load_store(path),
        None if load_sample => Ok(ItemStore::sample()),
        None => Ok(ItemStore::new()),
    }
}
