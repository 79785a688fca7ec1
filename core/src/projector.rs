//! 表示射影
//!
//! (項目列, 検索文字列, 照合対象) から区分済み・整列済みの表示構造を作る純粋関数。
//! 状態もキャッシュも持たない。入力が変わるたびに呼び出し側が再計算する。

use crate::collation::compare_names;
use crate::types::{FilterField, Item, Section, SectionKind};

/// 呼び出し側が保持する表示条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub filter_field: FilterField,
}

impl ViewState {
    pub fn new(search_text: impl Into<String>, filter_field: FilterField) -> Self {
        Self {
            search_text: search_text.into(),
            filter_field,
        }
    }

    /// 検索文字列と照合対象を初期値に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn project<'a>(&self, items: &'a [Item]) -> Vec<Section<'a>> {
        project(items, &self.search_text, self.filter_field)
    }
}

/// 項目列を区分に射影
///
/// 1. 検索文字列で絞り込み（空なら全件）
/// 2. 未購入 / 購入済みに分割
/// 3. 各区分を名前順に安定ソート
/// 4. 空でない区分だけを [to-buy, purchased] の順で返す
pub fn project<'a>(items: &'a [Item], search_text: &str, filter_field: FilterField) -> Vec<Section<'a>> {
    let matcher = Matcher::new(search_text, filter_field);

    let (mut bought, mut unbought): (Vec<&Item>, Vec<&Item>) = items
        .iter()
        .filter(|item| matcher.matches(item))
        .partition(|item| item.bought);

    unbought.sort_by(|a, b| compare_names(&a.name, &b.name));
    bought.sort_by(|a, b| compare_names(&a.name, &b.name));

    [(SectionKind::ToBuy, unbought), (SectionKind::Purchased, bought)]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| Section { title, items })
        .collect()
}

/// 検索条件（小文字化は1回だけ行う）
struct Matcher<'s> {
    needle: Option<String>,
    raw: &'s str,
    field: FilterField,
}

impl<'s> Matcher<'s> {
    fn new(search_text: &'s str, field: FilterField) -> Self {
        let needle = (!search_text.is_empty()).then(|| search_text.to_lowercase());
        Self {
            needle,
            raw: search_text,
            field,
        }
    }

    fn matches(&self, item: &Item) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        match self.field {
            // 価格に大文字小文字はないので生の文字列で照合
            FilterField::Price => item.price.to_string().contains(self.raw),
            FilterField::Store => item.store.to_lowercase().contains(needle.as_str()),
            FilterField::None => item.name.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::types::ItemId;

    fn item(id: &str, name: &str, price: f64, store: &str, bought: bool) -> Item {
        Item {
            id: ItemId::from(id),
            name: name.to_string(),
            price: Price::new(price).unwrap(),
            store: store.to_string(),
            bought,
            description: String::new(),
        }
    }

    fn scenario_items() -> Vec<Item> {
        vec![
            item("1", "Milk", 3.50, "A", false),
            item("2", "Coffee", 15.99, "A", true),
            item("3", "Eggs", 8.99, "B", false),
        ]
    }

    fn names(section: &Section<'_>) -> Vec<String> {
        section.items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_project_unfiltered_scenario() {
        let items = scenario_items();
        let sections = project(&items, "", FilterField::None);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, SectionKind::ToBuy);
        assert_eq!(names(&sections[0]), vec!["Eggs", "Milk"]);
        assert_eq!(sections[1].title, SectionKind::Purchased);
        assert_eq!(names(&sections[1]), vec!["Coffee"]);
    }

    #[test]
    fn test_project_store_filter_case_insensitive() {
        let items = vec![
            item("1", "Mleko", 3.50, "Biedronka", false),
            item("2", "Jajka", 8.99, "Lidl", false),
            item("3", "Kawa", 15.99, "BIEDRONKA", true),
        ];
        let sections = project(&items, "a", FilterField::Store);

        assert_eq!(sections.len(), 2);
        assert_eq!(names(&sections[0]), vec!["Mleko"]);
        assert_eq!(names(&sections[1]), vec!["Kawa"]);
    }

    #[test]
    fn test_project_name_filter_uppercase_query() {
        let items = scenario_items();
        let sections = project(&items, "MIL", FilterField::None);
        assert_eq!(sections.len(), 1);
        assert_eq!(names(&sections[0]), vec!["Milk"]);
    }

    #[test]
    fn test_project_price_filter_uses_shortest_decimal() {
        let items = scenario_items();

        let sections = project(&items, "3.5", FilterField::Price);
        assert_eq!(sections.len(), 1);
        assert_eq!(names(&sections[0]), vec!["Milk"]);

        // 3.50 は "3.5" と表現されるので一致しない
        assert!(project(&items, "3.50", FilterField::Price).is_empty());

        let sections = project(&items, "99", FilterField::Price);
        assert_eq!(names(&sections[0]), vec!["Eggs"]);
        assert_eq!(names(&sections[1]), vec!["Coffee"]);
    }

    #[test]
    fn test_project_no_match_is_empty() {
        let items = scenario_items();
        assert!(project(&items, "zzz", FilterField::None).is_empty());
    }

    #[test]
    fn test_project_empty_collection() {
        assert!(project(&[], "", FilterField::None).is_empty());
    }

    #[test]
    fn test_project_only_purchased_section() {
        let items = vec![item("1", "Kawa", 15.99, "A", true)];
        let sections = project(&items, "", FilterField::None);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, SectionKind::Purchased);
    }

    #[test]
    fn test_project_sections_agree_with_bought_flag() {
        let items = crate::sample::sample_items();
        for section in project(&items, "", FilterField::None) {
            let expected = section.title == SectionKind::Purchased;
            assert!(section.items.iter().all(|i| i.bought == expected));
        }
    }

    #[test]
    fn test_project_stable_for_equal_names() {
        let items = vec![
            item("b", "Milk", 2.0, "A", false),
            item("a", "Milk", 3.0, "B", false),
            item("c", "Bread", 1.0, "A", false),
        ];
        let sections = project(&items, "", FilterField::None);
        let ids: Vec<&str> = sections[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_search_ignores_filter_field() {
        let items = crate::sample::sample_items();
        let unfiltered = project(&items, "", FilterField::None);
        assert_eq!(unfiltered.iter().map(|s| s.items.len()).sum::<usize>(), items.len());

        assert_eq!(project(&items, "", FilterField::Price), unfiltered);
        assert_eq!(project(&items, "", FilterField::Store), unfiltered);
    }

    #[test]
    fn test_view_state_matches_free_function() {
        let items = scenario_items();
        let mut view = ViewState::new("e", FilterField::None);
        assert_eq!(view.project(&items), project(&items, "e", FilterField::None));

        view.reset();
        assert_eq!(view, ViewState::default());
        assert_eq!(view.project(&items), project(&items, "", FilterField::None));
    }
}
