//! Async boundary between the presentation layer and the store.
//!
//! Every call runs on a blocking worker while holding the store lock, so
//! writes are serialized with each other and with reads. Live query results
//! are published through one `watch` channel per [`QueryShape`]; a write
//! refreshes them before its future resolves.

use crate::core::store::{AppointmentStore, GuardedUpsert, UpsertOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::query_shape::QueryShape;
use crate::utils::date;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, warn};

type Snapshot = Vec<Appointment>;

/// Live view over one query shape. Dropping it unsubscribes.
pub struct Subscription {
    shape: QueryShape,
    rx: watch::Receiver<Snapshot>,
}

impl Subscription {
    pub fn shape(&self) -> QueryShape {
        self.shape
    }

    pub fn current(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot. `None` once the service is gone.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn cancel(self) {}
}

struct Feeds {
    senders: [watch::Sender<Snapshot>; 4],
}

impl Feeds {
    fn new() -> Self {
        Self {
            senders: std::array::from_fn(|_| watch::channel(Vec::new()).0),
        }
    }

    fn sender(&self, shape: QueryShape) -> &watch::Sender<Snapshot> {
        &self.senders[shape.index()]
    }

    fn publish(&self, shape: QueryShape, fresh: Snapshot) {
        let changed = self.sender(shape).send_if_modified(|current| {
            if *current == fresh {
                return false;
            }
            *current = fresh;
            true
        });
        if changed {
            debug!(shape = shape.as_str(), "snapshot published");
        }
    }

    /// Re-run every shape somebody is watching.
    fn refresh(&self, store: &AppointmentStore) -> AppResult<()> {
        let day = date::today();
        for shape in QueryShape::ALL {
            if self.sender(shape).receiver_count() == 0 {
                continue;
            }
            self.publish(shape, store.query(shape, day)?);
        }
        Ok(())
    }

    /// Refresh after a committed write. The write already happened, so a
    /// failed re-query only leaves subscribers on their previous snapshot.
    fn refresh_after_write(&self, store: &AppointmentStore) {
        if let Err(e) = self.refresh(store) {
            warn!(error = %e, "subscriber refresh failed after write");
        }
    }
}

struct Inner {
    store: Mutex<AppointmentStore>,
    feeds: Feeds,
}

#[derive(Clone)]
pub struct ScheduleService {
    inner: Arc<Inner>,
}

impl ScheduleService {
    pub fn new(store: AppointmentStore) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: Mutex::new(store),
                feeds: Feeds::new(),
            }),
        }
    }

    /// Open the database file off the async executor.
    pub async fn open(path: &str) -> AppResult<Self> {
        let path = path.to_string();
        let store = tokio::task::spawn_blocking(move || AppointmentStore::open(&path))
            .await
            .map_err(|e| AppError::Task(e.to_string()))??;
        Ok(Self::new(store))
    }

    async fn run<T, F>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut AppointmentStore, &Feeds) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        // Once spawned the worker runs to completion even if the caller
        // drops this future; a write either commits or rolls back.
        tokio::task::spawn_blocking(move || {
            let mut store = inner.store.lock().map_err(|_| AppError::StoreLock)?;
            op(&mut store, &inner.feeds)
        })
        .await
        .map_err(|e| AppError::Task(e.to_string()))?
    }

    // ------------------------------------------------
    // Commands
    // ------------------------------------------------

    pub async fn upsert_appointment(&self, appt: Appointment) -> AppResult<UpsertOutcome> {
        self.run(move |store, feeds| {
            let outcome = store.upsert(&appt)?;
            if outcome != UpsertOutcome::NoSuchIdentity {
                feeds.refresh_after_write(store);
            }
            Ok(outcome)
        })
        .await
    }

    /// Conflict check and upsert as one step under the store lock.
    pub async fn upsert_if_free(&self, appt: Appointment) -> AppResult<GuardedUpsert> {
        self.run(move |store, feeds| {
            let result = store.upsert_if_free(&appt)?;
            if matches!(
                result,
                GuardedUpsert::Saved(UpsertOutcome::Inserted(_) | UpsertOutcome::Updated)
            ) {
                feeds.refresh_after_write(store);
            }
            Ok(result)
        })
        .await
    }

    pub async fn delete_appointment(&self, appt: Appointment) -> AppResult<usize> {
        self.run(move |store, feeds| {
            let removed = store.delete(&appt)?;
            if removed > 0 {
                feeds.refresh_after_write(store);
            }
            Ok(removed)
        })
        .await
    }

    pub async fn delete_all(&self) -> AppResult<usize> {
        self.run(|store, feeds| {
            let removed = store.delete_all()?;
            if removed > 0 {
                feeds.refresh_after_write(store);
            }
            Ok(removed)
        })
        .await
    }

    // ------------------------------------------------
    // Observable queries
    // ------------------------------------------------

    pub async fn subscribe(&self, shape: QueryShape) -> AppResult<Subscription> {
        self.run(move |store, feeds| {
            feeds.publish(shape, store.query(shape, date::today())?);
            Ok(Subscription {
                shape,
                rx: feeds.sender(shape).subscribe(),
            })
        })
        .await
    }

    pub async fn all_appointments(&self) -> AppResult<Subscription> {
        self.subscribe(QueryShape::All).await
    }

    pub async fn today_appointments(&self) -> AppResult<Subscription> {
        self.subscribe(QueryShape::Today).await
    }

    pub async fn future_appointments(&self) -> AppResult<Subscription> {
        self.subscribe(QueryShape::Future).await
    }

    pub async fn past_appointments(&self) -> AppResult<Subscription> {
        self.subscribe(QueryShape::Past).await
    }

    // ------------------------------------------------
    // Point-in-time queries
    // ------------------------------------------------

    pub async fn snapshot(&self, shape: QueryShape) -> AppResult<Snapshot> {
        self.run(move |store, _| store.query(shape, date::today()))
            .await
    }

    pub async fn find(&self, id: i64) -> AppResult<Option<Appointment>> {
        self.run(move |store, _| store.find(id)).await
    }

    pub async fn overlapping_appointments(
        &self,
        exclude_id: i64,
        site_code: i64,
        start: i64,
        end: i64,
    ) -> AppResult<Snapshot> {
        self.run(move |store, _| store.overlapping(exclude_id, site_code, start, end))
            .await
    }

    pub async fn conflicts_for(&self, appt: Appointment) -> AppResult<Snapshot> {
        self.run(move |store, _| store.conflicts_for(&appt)).await
    }
}
