use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::{ValidationError, WasteId, WasteItem, WasteKind};
use super::report::RiskReport;
use super::repository::{RepositoryError, WasteRepository};
use super::validation;
use crate::config::RegistryConfig;

/// Service handling waste registration, lookup, risk aggregation, and processing.
pub struct WasteService<R> {
    repository: Arc<R>,
    config: RegistryConfig,
}

impl<R> WasteService<R>
where
    R: WasteRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, RegistryConfig::default())
    }

    pub fn with_config(repository: Arc<R>, config: RegistryConfig) -> Self {
        Self { repository, config }
    }

    pub fn register_organic(
        &self,
        id: &str,
        volume: f64,
        decay_level: i64,
    ) -> Result<WasteItem, WasteError> {
        validation::non_blank("waste_id", id)?;
        validation::volume(volume)?;
        let decay_level = validation::level("decay_level", decay_level)?;

        self.register(id, volume, WasteKind::Organic { decay_level })
    }

    pub fn register_medical(
        &self,
        id: &str,
        volume: f64,
        infection_level: i64,
    ) -> Result<WasteItem, WasteError> {
        validation::non_blank("waste_id", id)?;
        validation::volume(volume)?;
        let infection_level = validation::level("infection_level", infection_level)?;

        self.register(id, volume, WasteKind::Medical { infection_level })
    }

    pub fn register_hazardous(
        &self,
        id: &str,
        volume: f64,
        chemical_content: &str,
    ) -> Result<WasteItem, WasteError> {
        validation::non_blank("waste_id", id)?;
        validation::volume(volume)?;
        validation::non_blank("chemical_content", chemical_content)?;

        self.register(
            id,
            volume,
            WasteKind::Hazardous {
                chemical_content: chemical_content.to_string(),
            },
        )
    }

    fn register(&self, id: &str, volume: f64, kind: WasteKind) -> Result<WasteItem, WasteError> {
        let item = WasteItem::new(WasteId::from(id), volume, kind)?;

        if self.config.enforce_unique_ids {
            if !self.repository.save_if_absent(item.clone())? {
                warn!(id, "registration rejected: id already registered");
                return Err(ValidationError::DuplicateId {
                    id: item.id().clone(),
                }
                .into());
            }
        } else {
            self.repository.save(item.clone())?;
        }

        info!(
            id,
            category = item.category().label(),
            volume,
            kind = ?item.kind(),
            "waste registered"
        );
        Ok(item)
    }

    /// Every stored item in registration order.
    pub fn all_waste(&self) -> Result<Vec<WasteItem>, WasteError> {
        let items = self.repository.all()?;
        info!(total = items.len(), "listed waste registry");
        Ok(items)
    }

    /// First item registered under `id`, if any. Absence is not an error.
    pub fn find_by_id(&self, id: &str) -> Result<Option<WasteItem>, WasteError> {
        validation::non_blank("waste_id", id)?;

        let found = self.repository.get_by_id(&WasteId::from(id))?;
        match &found {
            Some(_) => info!(id, "waste found"),
            None => warn!(id, "waste not found"),
        }
        Ok(found)
    }

    pub fn compute_total_risk(&self) -> Result<f64, WasteError> {
        let total: f64 = self
            .repository
            .all()?
            .iter()
            .map(WasteItem::compute_risk)
            .sum();
        info!(total, "computed total risk");
        Ok(total)
    }

    /// Runs the kind-specific treatment for `id` and returns its outcome.
    ///
    /// Processing is not guarded against repeats: an already processed item
    /// is treated again and lands on the same status and message.
    pub fn process_waste(&self, id: &str) -> Result<String, WasteError> {
        validation::non_blank("waste_id", id)?;
        let waste_id = WasteId::from(id);

        let outcome = self.repository.update(&waste_id, |item| {
            let message = item.process();
            (message, item.status())
        })?;

        match outcome {
            Some((message, status)) => {
                info!(id, status = status.label(), "waste processed");
                Ok(message)
            }
            None => {
                error!(id, "processing failed: waste not found");
                Err(WasteError::NotFound { id: waste_id })
            }
        }
    }

    pub fn risk_report(&self) -> Result<RiskReport, WasteError> {
        let items = self.repository.all()?;
        Ok(RiskReport::from_items(&items))
    }
}

/// Error raised by the waste and transport services.
#[derive(Debug, thiserror::Error)]
pub enum WasteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("waste with id '{id}' not found")]
    NotFound { id: WasteId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
