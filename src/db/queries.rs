use crate::core::codec;
use crate::db::models::DbAppointmentRow;
use crate::errors::AppResult;
use crate::models::appointment::Appointment;
use rusqlite::{Connection, OptionalExtension, Params, Result, Row, params};

const SELECT_APPOINTMENTS: &str =
    "SELECT id, title, datetime, location, duration, description FROM appointments";

pub fn map_row(row: &Row) -> Result<DbAppointmentRow> {
    Ok(DbAppointmentRow {
        id: row.get("id")?,
        title: row.get("title")?,
        datetime: row.get("datetime")?,
        location: row.get("location")?,
        duration: row.get("duration")?,
        description: row.get("description")?,
    })
}

/// Run a SELECT over `appointments` and convert every row.
fn load_where<P: Params>(conn: &Connection, filter: &str, params: P) -> AppResult<Vec<Appointment>> {
    let sql = format!("{SELECT_APPOINTMENTS} {filter} ORDER BY datetime ASC, id ASC");
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(Appointment::try_from(r?)?);
    }
    Ok(out)
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Appointment>> {
    load_where(conn, "", [])
}

/// Appointments whose encoded start lies in `[lower, upper)`; a missing
/// bound is open.
pub fn load_between(
    conn: &Connection,
    lower: Option<i64>,
    upper: Option<i64>,
) -> AppResult<Vec<Appointment>> {
    load_where(
        conn,
        "WHERE (?1 IS NULL OR datetime >= ?1) AND (?2 IS NULL OR datetime < ?2)",
        params![lower, upper],
    )
}

/// Rows at a site that start before `end` and are not zero-length; the
/// exact overlap test is applied by the caller.
pub fn load_overlap_candidates(
    conn: &Connection,
    site_code: i64,
    exclude_id: i64,
    end: i64,
) -> AppResult<Vec<Appointment>> {
    load_where(
        conn,
        "WHERE location = ?1 AND id <> ?2 AND datetime < ?3 AND duration > 0",
        params![site_code, exclude_id, end],
    )
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<Appointment>> {
    let row = conn
        .query_row(
            &format!("{SELECT_APPOINTMENTS} WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;

    row.map(Appointment::try_from).transpose()
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM appointments", [], |row| row.get(0))?)
}

/// Insert a normalized appointment and return its new identity.
pub fn insert_appointment(conn: &Connection, appt: &Appointment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO appointments (title, datetime, location, duration, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            appt.title,
            codec::encode(&appt.datetime),
            appt.location.site_code(),
            codec::encode_duration(&appt.duration)?,
            appt.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update all fields except id; returns affected rows (0 or 1).
pub fn update_appointment(conn: &Connection, appt: &Appointment) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE appointments
         SET title = ?1, datetime = ?2, location = ?3,
             duration = ?4, description = ?5
         WHERE id = ?6",
        params![
            appt.title,
            codec::encode(&appt.datetime),
            appt.location.site_code(),
            codec::encode_duration(&appt.duration)?,
            appt.description,
            appt.id,
        ],
    )?;
    Ok(changed)
}

/// Delete the row only if it still holds exactly the caller's values.
pub fn delete_matching(conn: &Connection, appt: &Appointment) -> AppResult<usize> {
    let changed = conn.execute(
        "DELETE FROM appointments
         WHERE id = ?1 AND title = ?2 AND datetime = ?3
           AND location = ?4 AND duration = ?5 AND description = ?6",
        params![
            appt.id,
            appt.title,
            codec::encode(&appt.datetime),
            appt.location.site_code(),
            codec::encode_duration(&appt.duration)?,
            appt.description,
        ],
    )?;
    Ok(changed)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM appointments", [])?)
}
