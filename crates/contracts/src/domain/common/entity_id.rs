use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов сущностей каталога
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Числовое значение идентификатора
    fn value(&self) -> u32;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор поверх `u32`.
///
/// В JSON фикстур идентификатор хранится как обычное число.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        impl $crate::domain::common::EntityId for $name {
            fn value(&self) -> u32 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<u32>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use entity_id;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::aggregate::ProductId;

    #[test]
    fn test_from_string_roundtrip() {
        let id = ProductId::from_string(" 42 ").unwrap();
        assert_eq!(id, ProductId(42));
        assert_eq!(id.as_string(), "42");
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        let err = ProductId::from_string("abc").unwrap_err();
        assert!(err.starts_with("Invalid ProductId"));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&ProductId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
