use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::common::entity_id::entity_id;
use serde::{Deserialize, Serialize};

entity_id! {
    /// Уникальный идентификатор товара
    ProductId
}

/// Товар в исходном (плоском) виде
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category_id: CategoryId::new(category_id),
        }
    }
}
