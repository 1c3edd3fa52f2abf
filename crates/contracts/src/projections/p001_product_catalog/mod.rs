//! Витрина каталога: соединение товаров с категориями и владельцами,
//! затем фильтрация по состоянию UI.

pub mod dto;
pub mod filter;
pub mod join;

pub use dto::EnrichedProduct;
pub use filter::{visible_products, FilterState};
pub use join::{join_products, join_products_strict, validate_references};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::{Sex, User};
    use crate::domain::a002_category::aggregate::Category;
    use crate::domain::a003_product::aggregate::Product;
    use crate::shared::fixtures::Fixtures;

    fn scenario() -> Vec<EnrichedProduct> {
        let fixtures = Fixtures::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Fruits", "🍎", 1)],
            vec![Product::new(1, "Apple", 1), Product::new(2, "Banana", 1)],
        );
        join_products_strict(&fixtures).unwrap()
    }

    fn names(items: &[EnrichedProduct]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_scenario_empty_query_shows_everything() {
        let all = scenario();
        let visible = visible_products(&all, &FilterState::default());
        assert_eq!(names(&visible), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_scenario_query_ap() {
        let all = scenario();
        let visible = visible_products(&all, &FilterState::default().set_query("ap"));
        assert_eq!(names(&visible), vec!["Apple"]);
    }

    #[test]
    fn test_scenario_category_and_user() {
        let all = scenario();
        let by_category = visible_products(&all, &FilterState::default().set_category("Fruits"));
        assert_eq!(by_category.len(), 2);

        let by_user = visible_products(&all, &FilterState::default().set_user("Roma"));
        assert_eq!(by_user.len(), 2);
    }

    #[test]
    fn test_scenario_unknown_user_hides_everything() {
        let all = scenario();
        let visible = visible_products(&all, &FilterState::default().set_user("Nina"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_default_fixtures_are_consistent() {
        let fixtures = Fixtures::load_default().unwrap();
        let all = join_products_strict(&fixtures).unwrap();
        assert_eq!(all.len(), fixtures.products.len());
        assert!(all.iter().all(|p| p.category.is_some() && p.user.is_some()));
    }
}
