//! Состояние фильтров и последовательная фильтрация витрины.

use super::dto::EnrichedProduct;
use serde::{Deserialize, Serialize};

/// Состояние фильтров страницы.
///
/// Пустая строка означает, что фильтр не активен. Переходы чистые:
/// каждый возвращает новое значение.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub active_user: String,
    pub selected_category: String,
    /// Хранится как введено; обрезается только при сравнении
    pub query: String,
}

impl FilterState {
    pub fn set_user(self, name: impl Into<String>) -> Self {
        Self {
            active_user: name.into(),
            ..self
        }
    }

    pub fn set_category(self, title: impl Into<String>) -> Self {
        Self {
            selected_category: title.into(),
            ..self
        }
    }

    pub fn set_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn clear_query(self) -> Self {
        self.set_query(String::new())
    }

    /// Сбросить пользователя и категорию. Поисковая строка не трогается.
    pub fn reset_all(self) -> Self {
        Self {
            active_user: String::new(),
            selected_category: String::new(),
            ..self
        }
    }

    pub fn is_user_active(&self, name: &str) -> bool {
        self.active_user == name
    }

    pub fn is_category_active(&self, title: &str) -> bool {
        self.selected_category == title
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.active_user, &self.selected_category, &self.query]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }
}

/// Регистронезависимое вхождение обрезанного запроса в название.
///
/// Сравниваются и нижний, и верхний регистр: для некоторых символов
/// (например, `ß`) они дают разный результат.
pub fn name_matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    let lower = query.to_lowercase();
    let upper = query.to_uppercase();

    name.to_lowercase().contains(&lower) || name.to_uppercase().contains(&upper)
}

/// Отфильтровать товары: пользователь, затем категория, затем запрос.
pub fn visible_products(products: &[EnrichedProduct], filter: &FilterState) -> Vec<EnrichedProduct> {
    let mut prepared: Vec<EnrichedProduct> = products.to_vec();

    if !filter.active_user.is_empty() {
        prepared.retain(|p| p.user_name() == Some(filter.active_user.as_str()));
    }

    if !filter.selected_category.is_empty() {
        prepared.retain(|p| p.category_title() == Some(filter.selected_category.as_str()));
    }

    if !filter.query.is_empty() {
        prepared.retain(|p| name_matches_query(&p.name, &filter.query));
    }

    log::debug!(
        "Visible products: {} of {} ({:?})",
        prepared.len(),
        products.len(),
        filter
    );
    prepared
}
