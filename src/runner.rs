// src/runner.rs

//! Последовательный прогон: open -> create table -> insert -> select -> print -> commit -> close.
//!
//! Соединение и транзакция живут в scope: при ошибке на любом шаге
//! транзакция откатывается в `Drop`, соединение закрывается.

use std::io::{self, Write};

use log::{debug, info};
use rusqlite::Connection;
use thiserror::Error;

use crate::config::{RunConfig, SchemaMode};
use crate::db::{self, user::User, user::UserRepo, DbError};

/// Ошибка прогона с указанием шага, на котором он упал.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open database")]
    Open(#[source] DbError),

    #[error("failed to create schema")]
    CreateSchema(#[source] DbError),

    #[error("failed to begin transaction")]
    Begin(#[source] DbError),

    #[error("failed to insert row")]
    Insert(#[source] DbError),

    #[error("failed to query rows")]
    Query(#[source] DbError),

    #[error("failed to write rows")]
    Emit(#[source] io::Error),

    #[error("failed to commit")]
    Commit(#[source] DbError),

    #[error("failed to close database")]
    Close(#[source] DbError),
}

impl RunError {
    /// Повторный запуск в `Strict`: таблица users уже есть.
    pub fn is_table_exists(&self) -> bool {
        matches!(self, RunError::CreateSchema(DbError::Sqlite(e)) if db::is_table_exists(e))
    }
}

/// Полный прогон с путём `example.db` и выводом в stdout.
pub fn run_default() -> Result<Vec<User>, RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&RunConfig::default(), &mut out)
}

/// Выполняет все шаги по порядку, пишет по строке на каждую запись в `out`.
/// Возвращает прочитанные строки.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<User>, RunError> {
    let path = config.db_path();

    let mut conn = db::open_db(path).map_err(RunError::Open)?;
    db::register_hooks(&conn);

    // При `?` conn дропается и закрывается сам
    let users = execute_steps(&mut conn, config.schema_mode, out)?;

    db::close_db(conn, path).map_err(RunError::Close)?;
    info!("run finished, {} row(s) emitted", users.len());
    Ok(users)
}

fn execute_steps<W: Write>(
    conn: &mut Connection,
    mode: SchemaMode,
    out: &mut W,
) -> Result<Vec<User>, RunError> {
    // DDL в autocommit, как у исходного драйвера
    UserRepo::new(conn)
        .create_table(mode)
        .map_err(RunError::CreateSchema)?;

    let tx = conn
        .transaction()
        .map_err(|e| RunError::Begin(e.into()))?;

    let users = {
        let repo = UserRepo::new(&tx);
        repo.insert_literal().map_err(RunError::Insert)?;
        repo.all().map_err(RunError::Query)?
    };
    debug!("fetched {} row(s)", users.len());

    for user in &users {
        writeln!(out, "{user}").map_err(RunError::Emit)?;
    }
    out.flush().map_err(RunError::Emit)?;

    tx.commit().map_err(|e| RunError::Commit(e.into()))?;
    Ok(users)
}
