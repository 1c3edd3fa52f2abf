//! Общие типы каталога: сущности, фикстуры, соединение и фильтрация.
//!
//! Крейт не зависит от браузера и тестируется нативно.

pub mod domain;
pub mod projections;
pub mod shared;
