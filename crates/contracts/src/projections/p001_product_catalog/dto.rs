use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::{Category, CategoryId};
use crate::domain::a003_product::aggregate::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Товар со встроенными категорией и владельцем.
///
/// Пересоздаётся при каждом проходе рендера и нигде не хранится.
/// `category` пустая, если `category_id` не найден; `user` пустой, если не
/// найдена категория или её владелец.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn new(product: &Product, category: Option<Category>, user: Option<User>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category,
            user,
        }
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// "{icon} - {title}" или `None`, если категория не найдена
    pub fn category_label(&self) -> Option<String> {
        self.category.as_ref().map(Category::label)
    }

    pub fn is_owned_by_female(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_female)
    }
}
