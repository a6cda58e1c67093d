use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use ansi_term::Colour;

fn colour_for(operation: &str) -> Colour {
    match operation {
        "insert" => Colour::Green,
        "update" => Colour::Yellow,
        "delete" | "delete_all" => Colour::Red,
        "backup" => Colour::Cyan,
        "migration_applied" | "init" => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { last } = cmd {
        let pool = DbPool::new(&cfg.database_path().to_string_lossy())?;
        init_db(&pool.conn)?;

        let mut rows = load_log(&pool.conn)?;
        if let Some(n) = last {
            let skip = rows.len().saturating_sub(*n);
            rows.drain(..skip);
        }

        header("Internal log");
        if rows.is_empty() {
            info("No log entries.");
            return Ok(());
        }

        let width = rows.iter().map(|r| r.operation.len()).max().unwrap_or(0);
        let mut table = Table::new(["ID", "DATE", "OPERATION", "TARGET", "MESSAGE"]);
        for r in &rows {
            // padding first so the escape codes don't skew the column widths
            let op = format!("{:<width$}", r.operation, width = width);
            table.add_row(vec![
                r.id.to_string(),
                r.date.clone(),
                colour_for(&r.operation).paint(op).to_string(),
                r.target.clone(),
                r.message.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
