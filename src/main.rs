// src/main.rs

use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    // Логи только в stderr; RUST_LOG меняет уровень
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    sql_things::run_default()?;
    Ok(())
}
