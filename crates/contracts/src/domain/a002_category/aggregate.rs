use crate::domain::a001_user::aggregate::UserId;
use crate::domain::common::entity_id::entity_id;
use serde::{Deserialize, Serialize};

entity_id! {
    /// Уникальный идентификатор категории
    CategoryId
}

/// Категория товаров. `owner_id` ссылается на [`User`](crate::domain::a001_user::aggregate::User).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }

    /// Подпись для таблицы: "🍎 - Fruits"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_id_uses_fixture_name() {
        let category: Category =
            serde_json::from_str(r#"{"id":3,"title":"Fruits","icon":"🍏","ownerId":2}"#).unwrap();
        assert_eq!(category.owner_id, UserId(2));
        assert_eq!(category.label(), "🍏 - Fruits");
    }
}
