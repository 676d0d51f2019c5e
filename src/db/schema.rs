// src/db/schema.rs

/// Таблица users в "буквальном" виде: повторный запуск падает с
/// `table users already exists`.
pub const CREATE_USERS: &str = r#"
CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    name TEXT,
    age INTEGER
)
"#;

/// То же самое, но идемпотентно.
pub const CREATE_USERS_IF_NOT_EXISTS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT,
    age INTEGER
)
"#;

// Значения вшиты прямо в SQL, без bind-параметров.
pub const INSERT_ALICE: &str = "INSERT INTO users (name, age) VALUES ('Alice', 30)";

pub const SELECT_ALL_USERS: &str = "SELECT * FROM users";

pub const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";

/// Как создавать схему.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// `CREATE TABLE users (...)`, ошибка если таблица уже есть.
    #[default]
    Strict,
    /// `CREATE TABLE IF NOT EXISTS users (...)`.
    IfNotExists,
}

impl SchemaMode {
    pub fn create_table_sql(self) -> &'static str {
        match self {
            SchemaMode::Strict => CREATE_USERS,
            SchemaMode::IfNotExists => CREATE_USERS_IF_NOT_EXISTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_is_default() {
        assert_eq!(SchemaMode::default(), SchemaMode::Strict);
        assert!(!SchemaMode::Strict.create_table_sql().contains("IF NOT EXISTS"));
        assert!(SchemaMode::IfNotExists
            .create_table_sql()
            .contains("IF NOT EXISTS"));
    }
}
