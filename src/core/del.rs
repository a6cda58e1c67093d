use crate::core::service::ScheduleService;
use crate::errors::AppResult;
use crate::models::appointment::Appointment;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete by identity. Returns the removed record, or `None` when
    /// nothing matched.
    pub async fn by_id(service: &ScheduleService, id: i64) -> AppResult<Option<Appointment>> {
        let Some(current) = service.find(id).await? else {
            return Ok(None);
        };

        let removed = service.delete_appointment(current.clone()).await?;
        Ok((removed == 1).then_some(current))
    }

    pub async fn all(service: &ScheduleService) -> AppResult<usize> {
        service.delete_all().await
    }
}
