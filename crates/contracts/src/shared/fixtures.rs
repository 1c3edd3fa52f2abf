//! Статичные исходные данные каталога.
//!
//! JSON встраивается в бинарник через `include_str!` и разбирается один раз
//! при старте приложения. Дальше [`Fixtures`] передаётся явно и не меняется.

use super::error::{CatalogError, CatalogResult};
use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;
use serde::de::DeserializeOwned;

const USERS_JSON: &str = include_str!("fixtures/users.json");
const CATEGORIES_JSON: &str = include_str!("fixtures/categories.json");
const PRODUCTS_JSON: &str = include_str!("fixtures/products.json");

/// Три плоские коллекции в исходном порядке
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Fixtures {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Разобрать коллекции из JSON-текстов
    pub fn from_json(users: &str, categories: &str, products: &str) -> CatalogResult<Self> {
        Ok(Self {
            users: parse_collection("users", users)?,
            categories: parse_collection("categories", categories)?,
            products: parse_collection("products", products)?,
        })
    }

    /// Встроенные фикстуры приложения
    pub fn load_default() -> CatalogResult<Self> {
        let fixtures = Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)?;
        log::info!(
            "Fixtures loaded: {} users, {} categories, {} products",
            fixtures.users.len(),
            fixtures.categories.len(),
            fixtures.products.len()
        );
        Ok(fixtures)
    }
}

fn parse_collection<T: DeserializeOwned>(name: &'static str, raw: &str) -> CatalogResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Fixture { name, source })
}
