//! テキスト表示
//!
//! 射影結果と項目詳細を端末向けの文字列に整形する。

use shopping_list_core::{FilterField, Item, Section, ViewState};

pub const EMPTY_LIST_TEXT: &str = "No items on the list.";

/// 区分を番号付きで整形（番号は区分をまたいで1から連番）
pub fn render_sections(sections: &[Section<'_>], currency: &str) -> String {
    if sections.is_empty() {
        return format!("{}\n", EMPTY_LIST_TEXT);
    }

    let mut out = String::new();
    let mut row = 1;
    for section in sections {
        out.push_str(&format!("== {} ==\n", section.title));
        for item in &section.items {
            out.push_str(&render_row(row, item, currency));
            out.push('\n');
            row += 1;
        }
    }
    out
}

/// 1行表示: `  1. [x] Kawa  (15.99 PLN | Biedronka)`
pub fn render_row(row: usize, item: &Item, currency: &str) -> String {
    let mark = if item.bought { "x" } else { " " };
    format!(
        "{:>3}. [{}] {}  ({} {} | {})",
        row,
        mark,
        item.name,
        item.price.to_fixed(),
        currency,
        item.store
    )
}

/// 項目詳細
pub fn render_detail(item: &Item, currency: &str) -> String {
    let mut out = format!(
        "{}\n  Price: {} {}\n  Store: {}\n",
        item.name,
        item.price.to_fixed(),
        currency,
        item.store
    );
    if item.has_description() {
        out.push_str(&format!("  Description: {}\n", item.description));
    }
    out.push_str(&format!(
        "  Status: {}\n",
        if item.bought { "purchased" } else { "to buy" }
    ));
    out
}

/// 検索条件の表示（未設定ならNone）
pub fn render_view_status(view: &ViewState) -> Option<String> {
    if view.search_text.is_empty() && view.filter_field == FilterField::None {
        return None;
    }
    Some(format!(
        "Filter: \"{}\" (by {})",
        view.search_text,
        match view.filter_field {
            FilterField::None => "name",
            FilterField::Price => "price",
            FilterField::Store => "store",
        }
    ))
}
