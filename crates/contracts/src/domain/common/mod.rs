//! Общие типы для всех сущностей каталога

pub mod entity_id;

// Re-exports
pub use entity_id::EntityId;
