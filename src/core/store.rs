//! Appointment persistence engine.
//!
//! Every write runs in a single SQLite transaction together with its audit
//! row. Reads never lock anything beyond the statement they execute.

use crate::core::codec;
use crate::core::conflict::{ConflictQuery, Interval};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::appointment::Appointment;
use crate::models::query_shape::QueryShape;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Result of [`AppointmentStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// New row, with the identity the store assigned.
    Inserted(i64),
    /// Existing row overwritten; identity unchanged.
    Updated,
    /// Non-zero identity with no matching row. Nothing was written.
    NoSuchIdentity,
}

/// Result of [`AppointmentStore::upsert_if_free`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardedUpsert {
    Saved(UpsertOutcome),
    /// Nothing written; these appointments overlap at the same site.
    Blocked(Vec<Appointment>),
}

pub struct AppointmentStore {
    pool: DbPool,
}

impl AppointmentStore {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    // ------------------------------------------------
    // Commands
    // ------------------------------------------------

    /// Insert when `id == 0`, otherwise update the row with that id.
    ///
    /// The stored values are normalized (whole seconds); re-read the record
    /// instead of assuming the input was kept verbatim.
    pub fn upsert(&mut self, appt: &Appointment) -> AppResult<UpsertOutcome> {
        appt.validate()?;
        let appt = appt.normalized();
        Interval::of(&appt)?;

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let outcome = if appt.is_persisted() {
                match queries::update_appointment(&tx, &appt)? {
                    0 => UpsertOutcome::NoSuchIdentity,
                    _ => {
                        ttlog(&tx, "update", &appt.id.to_string(), &appt.title)?;
                        UpsertOutcome::Updated
                    }
                }
            } else {
                let id = queries::insert_appointment(&tx, &appt)?;
                ttlog(&tx, "insert", &id.to_string(), &appt.title)?;
                UpsertOutcome::Inserted(id)
            };

            tx.commit()?;
            debug!(?outcome, "upsert");
            Ok(outcome)
        })
    }

    /// Upsert only when no other appointment at the same site overlaps.
    /// Check and write happen under the same `&mut self`, so no other write
    /// can take the slot in between.
    pub fn upsert_if_free(&mut self, appt: &Appointment) -> AppResult<GuardedUpsert> {
        appt.validate()?;
        let conflicts = self.conflicts_for(appt)?;
        if !conflicts.is_empty() {
            return Ok(GuardedUpsert::Blocked(conflicts));
        }
        Ok(GuardedUpsert::Saved(self.upsert(appt)?))
    }

    /// Delete the row matching the appointment's identity *and* all of its
    /// values. A stale copy whose row has since changed deletes nothing.
    pub fn delete(&mut self, appt: &Appointment) -> AppResult<usize> {
        if !appt.is_persisted() || appt.duration < Duration::zero() {
            return Ok(0);
        }
        let appt = appt.normalized();

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let removed = queries::delete_matching(&tx, &appt)?;
            if removed > 0 {
                ttlog(&tx, "delete", &appt.id.to_string(), &appt.title)?;
            }
            tx.commit()?;

            debug!(id = appt.id, removed, "delete");
            Ok(removed)
        })
    }

    pub fn delete_all(&mut self) -> AppResult<usize> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let removed = queries::delete_all(&tx)?;
            ttlog(
                &tx,
                "delete_all",
                "appointments",
                &format!("{removed} rows removed"),
            )?;
            tx.commit()?;

            debug!(removed, "delete_all");
            Ok(removed)
        })
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    pub fn find(&self, id: i64) -> AppResult<Option<Appointment>> {
        queries::load_by_id(&self.pool.conn, id)
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count(&self.pool.conn)
    }

    /// Every appointment, ascending by start.
    pub fn all(&self) -> AppResult<Vec<Appointment>> {
        queries::load_all(&self.pool.conn)
    }

    /// Appointments starting on `day`.
    pub fn today_on(&self, day: NaiveDate) -> AppResult<Vec<Appointment>> {
        let (start, next) = codec::day_bounds(day)?;
        queries::load_between(&self.pool.conn, Some(start), Some(next))
    }

    /// Appointments starting on any day after `day`.
    pub fn future_on(&self, day: NaiveDate) -> AppResult<Vec<Appointment>> {
        let (_, next) = codec::day_bounds(day)?;
        queries::load_between(&self.pool.conn, Some(next), None)
    }

    /// Appointments starting before `day`.
    pub fn past_on(&self, day: NaiveDate) -> AppResult<Vec<Appointment>> {
        let (start, _) = codec::day_bounds(day)?;
        queries::load_between(&self.pool.conn, None, Some(start))
    }

    pub fn query(&self, shape: QueryShape, day: NaiveDate) -> AppResult<Vec<Appointment>> {
        match shape {
            QueryShape::All => self.all(),
            QueryShape::Today => self.today_on(day),
            QueryShape::Future => self.future_on(day),
            QueryShape::Past => self.past_on(day),
        }
    }

    /// Stored appointments at `site_code` overlapping `[start, end)`,
    /// ignoring `exclude_id`.
    pub fn overlapping(
        &self,
        exclude_id: i64,
        site_code: i64,
        start: i64,
        end: i64,
    ) -> AppResult<Vec<Appointment>> {
        self.detect(ConflictQuery::new(exclude_id, site_code, start, end)?)
    }

    /// Conflicts for a (possibly unsaved) appointment at its own location.
    pub fn conflicts_for(&self, appt: &Appointment) -> AppResult<Vec<Appointment>> {
        self.detect(ConflictQuery::for_appointment(&appt.normalized())?)
    }

    fn detect(&self, query: ConflictQuery) -> AppResult<Vec<Appointment>> {
        if query.interval.is_degenerate() {
            return Ok(Vec::new());
        }

        let candidates = queries::load_overlap_candidates(
            &self.pool.conn,
            query.site_code,
            query.exclude_id,
            query.interval.end,
        )?;

        let found = query.detect(candidates)?;
        debug!(
            site = query.site_code,
            start = query.interval.start,
            end = query.interval.end,
            found = found.len(),
            "overlap lookup"
        );
        Ok(found)
    }
}
