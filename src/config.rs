// src/config.rs

use std::path::{Path, PathBuf};

pub use crate::db::schema::SchemaMode;

/// Путь к файлу базы по умолчанию (относительно текущей директории).
pub const DEFAULT_DB_PATH: &str = "example.db";

/// Параметры одного прогона. Бинарник всегда берёт `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub db_path: PathBuf,
    pub schema_mode: SchemaMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            schema_mode: SchemaMode::Strict,
        }
    }
}

impl RunConfig {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_schema_mode(mut self, mode: SchemaMode) -> Self {
        self.schema_mode = mode;
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
