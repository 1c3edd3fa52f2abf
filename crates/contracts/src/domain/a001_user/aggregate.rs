use crate::domain::common::entity_id::entity_id;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

entity_id! {
    /// Уникальный идентификатор пользователя
    UserId
}

// ============================================================================
// Entity
// ============================================================================

/// Пол пользователя. Используется только для оформления ячейки владельца.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// Пользователь, владелец категорий
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}
