use crate::core::codec;
use crate::errors::AppResult;
use crate::models::location::Location;
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::fs;
use tracing::warn;

/// Summary figures shown by `db --info`.
#[derive(Debug, Default)]
pub struct DbStats {
    pub file_size: u64,
    pub total: i64,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub total_booked_secs: i64,
    pub per_location: Vec<(Location, i64)>,
}

pub fn collect(conn: &Connection, db_path: &str) -> AppResult<DbStats> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (total, first, last, booked): (i64, Option<i64>, Option<i64>, Option<i64>) = conn
        .query_row(
            "SELECT COUNT(*), MIN(datetime), MAX(datetime), SUM(duration) FROM appointments",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;

    let mut stmt = conn.prepare(
        "SELECT location, COUNT(*) FROM appointments GROUP BY location ORDER BY COUNT(*) DESC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;

    let mut per_location = Vec::new();
    for r in rows {
        let (code, n) = r?;
        // rows with an unknown site code are counted in `total` only
        match Location::from_site_code(code) {
            Some(loc) => per_location.push((loc, n)),
            None => warn!(code, rows = n, "unknown site code in appointments"),
        }
    }

    Ok(DbStats {
        file_size,
        total,
        first: first.map(codec::decode).transpose()?,
        last: last.map(codec::decode).transpose()?,
        total_booked_secs: booked.unwrap_or(0),
        per_location,
    })
}
