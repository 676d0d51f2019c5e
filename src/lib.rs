// src/lib.rs

//! Небольшой пример работы с SQLite: создать таблицу users, вставить
//! Alice, прочитать и напечатать все строки.

pub mod config;
pub mod db;
pub mod runner;

pub use config::{RunConfig, SchemaMode, DEFAULT_DB_PATH};
pub use db::field::Field;
pub use db::user::{User, UserRepo};
pub use db::DbError;
pub use runner::{run, run_default, RunError};
