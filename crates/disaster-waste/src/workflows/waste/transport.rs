use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{error, info, warn};

use super::domain::{WasteId, WasteStatus};
use super::repository::WasteRepository;
use super::service::WasteError;
use super::validation;

/// Layout used when rendering audit timestamps for operators.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Audit entry describing one successful transport. The core does not keep
/// these; callers persist them if they need a trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportRecord {
    pub timestamp: DateTime<Local>,
    pub waste_id: WasteId,
    pub volume: f64,
    pub new_status: WasteStatus,
    pub vehicle: String,
    pub destination: String,
}

impl TransportRecord {
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Moves registered waste into transport.
pub struct TransportService<R> {
    repository: Arc<R>,
}

impl<R> TransportService<R>
where
    R: WasteRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Marks `waste_id` as `Transporting` and returns the audit record.
    ///
    /// Items already in transport may be dispatched again; processed items
    /// are refused. The status check and the status change happen under a
    /// single repository update.
    pub fn transport(
        &self,
        waste_id: &str,
        vehicle: &str,
        destination: &str,
    ) -> Result<TransportRecord, WasteError> {
        validation::non_blank("waste_id", waste_id)?;
        validation::non_blank("vehicle", vehicle)?;
        validation::non_blank("destination", destination)?;

        let id = WasteId::from(waste_id);
        let outcome = self.repository.update(&id, |item| {
            item.start_transport().map(|()| (item.volume(), item.status()))
        })?;

        let (volume, new_status) = match outcome {
            Some(Ok(moved)) => moved,
            Some(Err(rejection)) => {
                warn!(id = waste_id, %rejection, "transport refused");
                return Err(rejection.into());
            }
            None => {
                error!(id = waste_id, "transport failed: waste not found");
                return Err(WasteError::NotFound { id });
            }
        };

        let record = TransportRecord {
            timestamp: Local::now(),
            waste_id: id,
            volume,
            new_status,
            vehicle: vehicle.to_string(),
            destination: destination.to_string(),
        };

        info!(
            id = waste_id,
            vehicle,
            destination,
            at = %record.timestamp_label(),
            "waste dispatched"
        );
        Ok(record)
    }
}
