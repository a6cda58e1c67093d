use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success};
use crate::utils::date;
use crate::utils::format_duration;
use chrono::Duration;

fn print_db_info(pool: &DbPool, db_path: &str, cfg: &Config) -> AppResult<()> {
    let s = stats::collect(&pool.conn, db_path)?;
    let fmt_opt = |dt: Option<chrono::NaiveDateTime>| {
        dt.map(|d| date::format_datetime(&d, &cfg.datetime_format))
            .unwrap_or_else(|| "-".to_string())
    };

    header("Database info");
    println!("Path          : {}", db_path);
    println!("Size          : {:.1} KiB", s.file_size as f64 / 1024.0);
    println!("Appointments  : {}", s.total);
    println!("First         : {}", fmt_opt(s.first));
    println!("Last          : {}", fmt_opt(s.last));
    println!(
        "Booked time   : {}",
        format_duration(&Duration::seconds(s.total_booked_secs))
    );
    for (loc, n) in &s.per_location {
        println!("  {:<16}{}", loc.label(), n);
    }

    let pending = pending_migrations(&pool.conn)?;
    println!("Pending migr. : {}", pending.len());
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let db_path = cfg.database_path().to_string_lossy().to_string();
        let pool = DbPool::new(&db_path)?;

        if *migrate {
            info("Running migrations…");
            let applied = run_pending_migrations(&pool.conn)?;
            if applied.is_empty() {
                success("Schema is up to date.");
            } else {
                for v in &applied {
                    info(format!("Applied {}", v));
                }
                success(format!("{} migration(s) applied.", applied.len()));
            }
        }

        if *show_info {
            print_db_info(&pool, &db_path, cfg)?;
        }

        if *check {
            info("Running integrity check…");
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
