//! 買い物リストの型定義
//!
//! - ItemId: 作成時に割り当てる不透明なID
//! - Item: リストの1項目
//! - FilterField: 検索文字列を照合する属性
//! - Section: 表示用に区分された項目のまとまり

use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 項目ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// 新しいIDを発行（UUID v4）
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 買い物リストの項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub store: String,
    #[serde(default)]
    pub bought: bool,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// 検索文字列の照合対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    /// 名前で照合（デフォルト）
    #[default]
    None,
    /// 価格の10進表現で照合
    Price,
    /// 店名で照合
    Store,
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "name" => Ok(FilterField::None),
            "price" => Ok(FilterField::Price),
            "store" => Ok(FilterField::Store),
            _ => Err(format!("Unknown filter: {}. Use none, price, or store", s)),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::None => write!(f, "none"),
            FilterField::Price => write!(f, "price"),
            FilterField::Store => write!(f, "store"),
        }
    }
}

/// 表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    #[serde(rename = "to-buy")]
    ToBuy,
    #[serde(rename = "purchased")]
    Purchased,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ToBuy => "to-buy",
            SectionKind::Purchased => "purchased",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// 区分ごとの項目列（コレクションからの借用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a> {
    pub title: SectionKind,
    pub items: Vec<&'a Item>,
}
