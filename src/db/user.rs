// src/db/user.rs

use std::fmt;

use log::debug;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::schema::{SchemaMode, COUNT_USERS, INSERT_ALICE, SELECT_ALL_USERS};
use super::Result;

/// Строка таблицы users. `id` это rowid, всегда целое; `name` и `age`
/// читаются как есть, с любым типом хранения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Field,
    pub age: Field,
}

impl User {
    /// Маппинг для `SELECT *`: колонки по порядку id, name, age.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
        })
    }
}

/// Печатается как кортеж: `(1, 'Alice', 30)`, NULL -> `None`.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.name, self.age)
    }
}

/// Работает и с `Transaction` (через deref на `Connection`).
pub struct UserRepo<'a> {
    conn: &'a Connection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create_table(&self, mode: SchemaMode) -> Result<()> {
        self.conn.execute(mode.create_table_sql(), [])?;
        debug!("users table created ({mode:?})");
        Ok(())
    }

    /// Вставляет Alice/30, возвращает присвоенный id.
    pub fn insert_literal(&self) -> Result<i64> {
        self.conn.execute(INSERT_ALICE, [])?;
        let id = self.conn.last_insert_rowid();
        debug!("inserted user rowid={id}");
        Ok(id)
    }

    /// Весь `SELECT * FROM users` сразу в память.
    pub fn all(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let rows = stmt.query_map([], User::from_row)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    pub fn count(&self) -> Result<i64> {
        let n = self.conn.query_row(COUNT_USERS, [], |r| r.get(0))?;
        Ok(n)
    }

    /// Все строки одним JSON-массивом.
    pub fn all_json(&self) -> Result<String> {
        let users = self.all()?;
        Ok(serde_json::to_string(&users)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    fn user(id: i64, name: impl Into<Field>, age: impl Into<Field>) -> User {
        User {
            id,
            name: name.into(),
            age: age.into(),
        }
    }

    fn alice(id: i64) -> User {
        user(id, "Alice", 30i64)
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(alice(1).to_string(), "(1, 'Alice', 30)");
        assert_eq!(user(2, Field::Null, Field::Null).to_string(), "(2, None, None)");
        assert_eq!(user(3, "O'Neil", 7i64).to_string(), "(3, \"O'Neil\", 7)");
        assert_eq!(user(4, "Bob", 3.5f64).to_string(), "(4, 'Bob', 3.5)");
        assert_eq!(user(5, vec![0u8, 0x41], "x").to_string(), "(5, b'\\x00A', 'x')");
    }

    #[test]
    fn insert_and_select() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let repo = UserRepo::new(&conn);
        repo.create_table(SchemaMode::Strict)?;

        assert_eq!(repo.insert_literal()?, 1);
        assert_eq!(repo.insert_literal()?, 2);

        let users = repo.all()?;
        assert_eq!(
            users,
            vec![
                alice(1),
                alice(2),
            ]
        );
        assert_eq!(repo.count()?, 2);
        Ok(())
    }

    #[test]
    fn strict_create_fails_twice() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let repo = UserRepo::new(&conn);
        repo.create_table(SchemaMode::Strict)?;

        match repo.create_table(SchemaMode::Strict) {
            Err(DbError::Sqlite(e)) => assert!(crate::db::is_table_exists(&e)),
            other => panic!("expected table-exists error, got {other:?}"),
        }
        // IF NOT EXISTS проходит
        repo.create_table(SchemaMode::IfNotExists)?;
        Ok(())
    }

    #[test]
    fn nulls_are_read_as_none() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let repo = UserRepo::new(&conn);
        repo.create_table(SchemaMode::Strict)?;
        conn.execute("INSERT INTO users (id) VALUES (10)", [])?;

        assert_eq!(repo.all()?, vec![user(10, Field::Null, Field::Null)]);
        Ok(())
    }

    #[test]
    fn reads_values_stored_with_other_types() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let repo = UserRepo::new(&conn);
        repo.create_table(SchemaMode::Strict)?;
        conn.execute("INSERT INTO users (name, age) VALUES ('Bob', 3.5)", [])?;
        conn.execute("INSERT INTO users (name, age) VALUES (42, 'old')", [])?;
        conn.execute("INSERT INTO users (name, age) VALUES (x'00ff', NULL)", [])?;

        let lines: Vec<String> = repo.all()?.iter().map(User::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "(1, 'Bob', 3.5)",
                "(2, '42', 'old')",
                "(3, b'\\x00\\xff', None)",
            ]
        );
        Ok(())
    }

    #[test]
    fn all_json() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let repo = UserRepo::new(&conn);
        repo.create_table(SchemaMode::Strict)?;
        assert_eq!(repo.all_json()?, "[]");

        repo.insert_literal()?;
        assert_eq!(repo.all_json()?, r#"[{"id":1,"name":"Alice","age":30}]"#);
        Ok(())
    }
}
