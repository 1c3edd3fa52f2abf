use super::error::CatalogResult;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub catalog: CatalogSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogSection {
    pub title: String,
    /// Отклонять фикстуры с висячими ссылками вместо подстановки пустых связей
    #[serde(default = "default_strict")]
    pub strict_references: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_strict() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
title = "Product Categories"
strict_references = true

[logging]
level = "debug"
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> CatalogResult<CatalogConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load the embedded default configuration
///
/// В браузере нет файловой системы, поэтому конфигурация всегда
/// компилируется в wasm.
pub fn load_config() -> CatalogResult<CatalogConfig> {
    parse_config(DEFAULT_CONFIG)
}

impl LoggingSection {
    /// Уровень логирования; неизвестные значения трактуются как `Info`
    pub fn log_level(&self) -> log::Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}
