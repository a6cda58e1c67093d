use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();
    let db_str = db_path.to_string_lossy().to_string();

    info("Initializing rSchedule…");
    if cli.test {
        info("Config file : (test mode, not written)");
    } else {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_str));

    let pool = DbPool::new(&db_str)?;
    let applied = init_db(&pool.conn)?;
    for version in &applied {
        info(format!("Applied migration {}", version));
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &db_str,
        &format!("Database initialized at {}", db_str),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", db_str));
    Ok(())
}
