// src/db/mod.rs
//
// Здесь:
// 1) открываем/закрываем файл базы
// 2) регистрируем hooks для отладочного лога
// 3) общий тип ошибки для слоя БД

pub mod field;
pub mod schema;
pub mod user;

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{hooks::Action, Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to close database {}: {source}", .path.display())]
    Close {
        path: PathBuf,
        source: rusqlite::Error,
    },
}

pub type Result<T, E = DbError> = std::result::Result<T, E>;

/// Открывает (или создаёт) файл базы по пути `path`.
pub fn open_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    )?;
    info!("opened database at {}", path.display());
    Ok(conn)
}

/// Явно закрывает соединение. Если соединение просто дропнуть, ошибка
/// закрытия будет потеряна.
pub fn close_db(conn: Connection, path: &Path) -> Result<()> {
    conn.close().map_err(|(_conn, source)| DbError::Close {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("closed database at {}", path.display());
    Ok(())
}

/// `CREATE TABLE` на существующую таблицу: SQLite отдаёт
/// "table users already exists". Свежий SQLite (bundled) возвращает это
/// ещё на prepare как `SqlInputError`, старый как `SqliteFailure`.
pub fn is_table_exists(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(_, Some(msg))
            | rusqlite::Error::SqlInputError { msg, .. }
            if msg.contains("already exists")
    )
}

// Hook'и пишут только в log (stderr), stdout не трогают.
pub fn register_hooks(conn: &Connection) {
    conn.commit_hook(Some(|| {
        debug!("::HOOK:: commit");
        // true превратит commit в rollback
        false
    }));

    conn.rollback_hook(Some(|| {
        debug!("::HOOK:: rollback");
    }));

    conn.update_hook(Some(|action: Action, db: &str, table: &str, rowid: i64| {
        let action = match action {
            Action::SQLITE_INSERT => "Insert",
            Action::SQLITE_UPDATE => "Update",
            Action::SQLITE_DELETE => "Delete",
            _ => "Unknown",
        };
        debug!("::HOOK:: {action} on table '{table}' in DB '{db}', rowid: {rowid}");
    }));
}
