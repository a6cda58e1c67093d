use crate::core::service::ScheduleService;
use crate::core::store::{GuardedUpsert, UpsertOutcome};
use crate::errors::AppResult;
use crate::models::appointment::Appointment;
use crate::models::location::Location;
use chrono::{Duration, NaiveDateTime};

/// Field changes for `edit`; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct AppointmentPatch {
    pub title: Option<String>,
    pub datetime: Option<NaiveDateTime>,
    pub location: Option<Location>,
    pub duration: Option<Duration>,
    pub description: Option<String>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.datetime.is_none()
            && self.location.is_none()
            && self.duration.is_none()
            && self.description.is_none()
    }

    pub fn apply_to(&self, appt: &Appointment) -> Appointment {
        Appointment {
            id: appt.id,
            title: self.title.clone().unwrap_or_else(|| appt.title.clone()),
            datetime: self.datetime.unwrap_or(appt.datetime),
            location: self.location.unwrap_or(appt.location),
            duration: self.duration.unwrap_or(appt.duration),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| appt.description.clone()),
        }
    }
}

#[derive(Debug)]
pub enum SaveResult {
    Saved(UpsertOutcome),
    /// Not written: the slot is taken at that site.
    Blocked(Vec<Appointment>),
    /// `edit` addressed an identity that is not stored.
    Missing,
}

/// High-level business logic for `add` and `edit`.
pub struct AddLogic;

impl AddLogic {
    /// Save `appt`, refusing when `check_conflicts` is set and the slot
    /// overlaps another appointment at the same site.
    pub async fn save(
        service: &ScheduleService,
        appt: Appointment,
        check_conflicts: bool,
    ) -> AppResult<SaveResult> {
        let outcome = if check_conflicts {
            match service.upsert_if_free(appt).await? {
                GuardedUpsert::Saved(outcome) => outcome,
                GuardedUpsert::Blocked(conflicts) => return Ok(SaveResult::Blocked(conflicts)),
            }
        } else {
            service.upsert_appointment(appt).await?
        };

        match outcome {
            UpsertOutcome::NoSuchIdentity => Ok(SaveResult::Missing),
            outcome => Ok(SaveResult::Saved(outcome)),
        }
    }

    /// Load `id`, apply the patch and save it back under the same identity.
    pub async fn edit(
        service: &ScheduleService,
        id: i64,
        patch: &AppointmentPatch,
        check_conflicts: bool,
    ) -> AppResult<(SaveResult, Option<Appointment>)> {
        let Some(current) = service.find(id).await? else {
            return Ok((SaveResult::Missing, None));
        };

        let updated = patch.apply_to(&current);
        let result = Self::save(service, updated.clone(), check_conflicts).await?;
        Ok((result, Some(updated.normalized())))
    }
}
