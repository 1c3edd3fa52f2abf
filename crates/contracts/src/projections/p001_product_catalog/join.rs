//! Денормализация: product → category → user.

use super::dto::EnrichedProduct;
use crate::domain::a001_user::aggregate::{User, UserId};
use crate::domain::a002_category::aggregate::{Category, CategoryId};
use crate::shared::error::{CatalogError, CatalogResult};
use crate::shared::fixtures::Fixtures;

fn find_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|category| category.id == id)
}

fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}

/// Соединить товары с категориями и владельцами.
///
/// Порядок товаров сохраняется. Ненайденная ссылка даёт пустую связь, а не ошибку.
pub fn join_products(fixtures: &Fixtures) -> Vec<EnrichedProduct> {
    let enriched: Vec<EnrichedProduct> = fixtures
        .products
        .iter()
        .map(|product| {
            let category = find_category(&fixtures.categories, product.category_id).cloned();
            let user = category
                .as_ref()
                .and_then(|c| find_user(&fixtures.users, c.owner_id))
                .cloned();

            match &category {
                None => log::warn!(
                    "Product {} references missing category {}",
                    product.id,
                    product.category_id
                ),
                Some(c) if user.is_none() => log::warn!(
                    "Category {} references missing owner {}",
                    c.id,
                    c.owner_id
                ),
                Some(_) => {}
            }

            EnrichedProduct::new(product, category, user)
        })
        .collect();

    log::debug!("Joined {} products", enriched.len());
    enriched
}

/// Проверить, что все ссылки разрешаются.
///
/// Сначала проверяются товары, затем категории; возвращается первая висячая ссылка.
pub fn validate_references(fixtures: &Fixtures) -> CatalogResult<()> {
    for product in &fixtures.products {
        if find_category(&fixtures.categories, product.category_id).is_none() {
            return Err(CatalogError::MissingCategory {
                product_id: product.id,
                category_id: product.category_id,
            });
        }
    }

    for category in &fixtures.categories {
        if find_user(&fixtures.users, category.owner_id).is_none() {
            return Err(CatalogError::MissingOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            });
        }
    }

    Ok(())
}

/// [`join_products`] после [`validate_references`]
pub fn join_products_strict(fixtures: &Fixtures) -> CatalogResult<Vec<EnrichedProduct>> {
    validate_references(fixtures)?;
    Ok(join_products(fixtures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::Sex;
    use crate::domain::a003_product::aggregate::{Product, ProductId};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Собирает предупреждения в буфер текущего потока
    struct WarnCollector;

    impl log::Log for WarnCollector {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static COLLECTOR: WarnCollector = WarnCollector;
    static INSTALL: Once = Once::new();

    fn collect_warnings(f: impl FnOnce()) -> Vec<String> {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&COLLECTOR);
            log::set_max_level(log::LevelFilter::Warn);
        });
        WARNINGS.with(|w| w.borrow_mut().clear());
        f();
        WARNINGS.with(|w| w.borrow_mut().drain(..).collect())
    }

    fn fixtures() -> Fixtures {
        Fixtures::new(
            vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![
                Category::new(1, "Grocery", "🍞", 2),
                Category::new(2, "Drinks", "🍺", 1),
                Category::new(3, "Orphans", "❓", 99),
            ],
            vec![
                Product::new(10, "Wine", 2),
                Product::new(11, "Bread", 1),
                Product::new(12, "Ghost", 42),
                Product::new(13, "Lost", 3),
            ],
        )
    }

    #[test]
    fn test_join_preserves_source_order() {
        let joined = join_products(&fixtures());
        let ids: Vec<u32> = joined.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_join_resolves_category_and_owner() {
        let joined = join_products(&fixtures());
        assert_eq!(joined[0].category_title(), Some("Drinks"));
        assert_eq!(joined[0].user_name(), Some("Roma"));
        assert_eq!(joined[1].category_title(), Some("Grocery"));
        assert_eq!(joined[1].user_name(), Some("Anna"));
        assert!(joined[1].is_owned_by_female());
    }

    #[test]
    fn test_missing_category_yields_no_category_and_no_user() {
        let joined = join_products(&fixtures());
        assert_eq!(joined[2].category, None);
        assert_eq!(joined[2].user, None);
        assert_eq!(joined[2].category_label(), None);
    }

    #[test]
    fn test_missing_owner_keeps_category() {
        let joined = join_products(&fixtures());
        assert_eq!(joined[3].category_title(), Some("Orphans"));
        assert_eq!(joined[3].user, None);
    }

    #[test]
    fn test_join_does_not_deduplicate() {
        let mut fx = fixtures();
        fx.products.push(Product::new(10, "Wine", 2));
        assert_eq!(join_products(&fx).len(), 5);
    }

    #[test]
    fn test_validate_reports_first_missing_category() {
        let err = validate_references(&fixtures()).unwrap_err();
        match err {
            CatalogError::MissingCategory {
                product_id,
                category_id,
            } => {
                assert_eq!(product_id, ProductId(12));
                assert_eq!(category_id, CategoryId(42));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_reports_missing_owner() {
        let mut fx = fixtures();
        fx.products.retain(|p| p.id != ProductId(12));
        let err = join_products_strict(&fx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "category 3 references missing owner 99"
        );
    }

    #[test]
    fn test_strict_join_on_clean_data() {
        let mut fx = fixtures();
        fx.products.retain(|p| p.id.0 < 12);
        fx.categories.retain(|c| c.id.0 < 3);
        let joined = join_products_strict(&fx).unwrap();
        assert_eq!(joined, join_products(&fx));
    }

    #[test]
    fn test_join_warns_about_every_dangling_reference() {
        let fx = Fixtures::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Orphans", "❓", 99)],
            vec![Product::new(1, "Lost", 1), Product::new(2, "Ghost", 42)],
        );

        let warnings = collect_warnings(|| {
            let joined = join_products(&fx);
            assert_eq!(joined[0].user, None);
            assert_eq!(joined[1].category, None);
        });

        assert_eq!(
            warnings,
            vec![
                "Category 1 references missing owner 99".to_string(),
                "Product 2 references missing category 42".to_string(),
            ]
        );
    }

    #[test]
    fn test_join_is_silent_on_clean_data() {
        let fx = Fixtures::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Drinks", "🍺", 1)],
            vec![Product::new(1, "Wine", 1)],
        );
        assert!(collect_warnings(|| {
            join_products(&fx);
        })
        .is_empty());
    }
}
