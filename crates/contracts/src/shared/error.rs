use crate::domain::a001_user::aggregate::UserId;
use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::a003_product::aggregate::ProductId;
use thiserror::Error;

/// Ошибки загрузки и проверки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("fixture '{name}' is not valid JSON: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("config is not valid TOML: {0}")]
    Config(#[from] toml::de::Error),

    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("category {category_id} references missing owner {owner_id}")]
    MissingOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
