use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::workflows::waste::domain::{WasteId, WasteItem};
use crate::workflows::waste::repository::{
    InMemoryWasteRepository, RepositoryError, WasteRepository,
};
use crate::workflows::waste::{TransportService, WasteService};

pub(super) struct Desk {
    pub(super) repository: Arc<InMemoryWasteRepository>,
    pub(super) waste: WasteService<InMemoryWasteRepository>,
    pub(super) transport: TransportService<InMemoryWasteRepository>,
}

pub(super) fn desk() -> Desk {
    desk_with(RegistryConfig::default())
}

pub(super) fn desk_with(config: RegistryConfig) -> Desk {
    let repository = Arc::new(InMemoryWasteRepository::new());
    Desk {
        waste: WasteService::with_config(repository.clone(), config),
        transport: TransportService::new(repository.clone()),
        repository,
    }
}

/// Registers the three reference items: organic `L001` (100 kg, decay 5),
/// medical `L002` (50 kg, infection 8), and hazardous `L003` (30 kg, mercury).
pub(super) fn seeded_desk() -> Desk {
    let desk = desk();
    desk.waste
        .register_organic("L001", 100.0, 5)
        .expect("organic registers");
    desk.waste
        .register_medical("L002", 50.0, 8)
        .expect("medical registers");
    desk.waste
        .register_hazardous("L003", 30.0, "Mercury")
        .expect("hazardous registers");
    desk
}

pub(super) fn stored_count(desk: &Desk) -> usize {
    desk.repository.count().expect("count succeeds")
}

/// Repository whose every call fails, for checking error propagation.
#[derive(Default)]
pub(super) struct OfflineRepository;

impl WasteRepository for OfflineRepository {
    fn save(&self, _item: WasteItem) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn save_if_absent(&self, _item: WasteItem) -> Result<bool, RepositoryError> {
        Err(offline())
    }

    fn all(&self) -> Result<Vec<WasteItem>, RepositoryError> {
        Err(offline())
    }

    fn get_by_id(&self, _id: &WasteId) -> Result<Option<WasteItem>, RepositoryError> {
        Err(offline())
    }

    fn update<T, F>(&self, _id: &WasteId, _apply: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut WasteItem) -> T,
    {
        Err(offline())
    }
}

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("offline".to_string())
}
