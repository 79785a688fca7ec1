//! 項目ストア
//!
//! 買い物リストの唯一の正本。操作は全て適用されるか全く適用されないかのどちらかで、
//! 失敗時にコレクションは変化しない。

use crate::error::{Error, Result, ValidationError};
use crate::price::Price;
use crate::types::{Item, ItemId};
use std::collections::HashSet;

/// 項目コレクションの所有者
///
/// 新しい項目は先頭に追加される（新しい順）。この順序は射影の入力であり、
/// 表示順ではない。
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の項目列からストアを構築
    ///
    /// IDの重複、空の名前・店名があれば全体を拒否する。
    pub fn with_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(ValidationError::EmptyName.into());
            }
            if item.store.trim().is_empty() {
                return Err(ValidationError::EmptyStore.into());
            }
            if !seen.insert(&item.id) {
                return Err(ValidationError::DuplicateId(item.id.clone()).into());
            }
        }
        Ok(Self { items })
    }

    /// デモ用の初期商品
    pub fn sample() -> Self {
        Self {
            items: crate::sample::sample_items(),
        }
    }

    /// 項目を追加
    ///
    /// 名前・店名は前後の空白を除いて保存する。価格は文字列から解析し、
    /// 失敗した場合は0に置き換えずにエラーを返す。
    pub fn add(&mut self, name: &str, price: &str, store: &str, description: &str) -> Result<&Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let store = store.trim();
        if store.is_empty() {
            return Err(ValidationError::EmptyStore.into());
        }
        let price = Price::parse(price)?;

        let item = Item {
            id: self.fresh_id(),
            name: name.to_string(),
            price,
            store: store.to_string(),
            bought: false,
            description: description.trim().to_string(),
        };
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// 購入済みフラグを反転
    pub fn toggle_bought(&mut self, id: &ItemId) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        item.bought = !item.bought;
        Ok(())
    }

    /// 項目を削除して返す
    ///
    /// 存在しないIDは黙って無視せず `NotFound` を返す。削除確認は呼び出し側の責務。
    pub fn remove(&mut self, id: &ItemId) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// 詳細表示用に1項目を取得
    pub fn detail(&self, id: &ItemId) -> Result<&Item> {
        self.get(id).ok_or_else(|| Error::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// 挿入順（新しい順）の項目
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
