//! デモ用の初期商品

use crate::price::Price;
use crate::types::{Item, ItemId};

/// 初期商品5件（id "1".."5"、Kawaのみ購入済み）
pub fn sample_items() -> Vec<Item> {
    [
        ("1", "Mleko", 3.50, "Biedronka", false, "Świeże mleko 2%"),
        ("2", "Chleb", 4.00, "Piekarnia", false, "Chleb razowy"),
        ("3", "Jajka", 8.99, "Lidl", false, "Jajka ściółkowe, 10 sztuk"),
        ("4", "Kawa", 15.99, "Biedronka", true, "Kawa ziarnista"),
        ("5", "Cukier", 3.00, "Lidl", false, "Cukier biały"),
    ]
    .into_iter()
    .map(|(id, name, price, store, bought, description)| Item {
        id: ItemId::from(id),
        name: name.to_string(),
        price: Price(price),
        store: store.to_string(),
        bought,
        description: description.to_string(),
    })
    .collect()
}
