use std::sync::{Mutex, MutexGuard};

use super::domain::{WasteId, WasteItem};

/// Storage abstraction shared by the waste and transport services.
///
/// Items keep insertion order and ids are not required to be unique: lookups
/// and updates resolve to the first item carrying the id.
pub trait WasteRepository: Send + Sync {
    fn save(&self, item: WasteItem) -> Result<(), RepositoryError>;

    /// Saves `item` only when no stored item carries its id. Returns whether
    /// the item was stored.
    fn save_if_absent(&self, item: WasteItem) -> Result<bool, RepositoryError>;

    fn all(&self) -> Result<Vec<WasteItem>, RepositoryError>;

    fn get_by_id(&self, id: &WasteId) -> Result<Option<WasteItem>, RepositoryError>;

    /// Applies `apply` to the first item carrying `id` while holding the store
    /// exclusively, so a check and the mutation that follows it cannot
    /// interleave with another writer. Returns `None` when no item matches.
    fn update<T, F>(&self, id: &WasteId, apply: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut WasteItem) -> T;

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.all()?.len())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store backed by an ordered list.
#[derive(Debug, Default)]
pub struct InMemoryWasteRepository {
    items: Mutex<Vec<WasteItem>>,
}

impl InMemoryWasteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<MutexGuard<'_, Vec<WasteItem>>, RepositoryError> {
        self.items
            .lock()
            .map_err(|_| RepositoryError::Unavailable("waste store mutex poisoned".to_string()))
    }
}

impl WasteRepository for InMemoryWasteRepository {
    fn save(&self, item: WasteItem) -> Result<(), RepositoryError> {
        self.items()?.push(item);
        Ok(())
    }

    fn save_if_absent(&self, item: WasteItem) -> Result<bool, RepositoryError> {
        let mut guard = self.items()?;
        if guard.iter().any(|stored| stored.id() == item.id()) {
            return Ok(false);
        }
        guard.push(item);
        Ok(true)
    }

    fn all(&self) -> Result<Vec<WasteItem>, RepositoryError> {
        Ok(self.items()?.clone())
    }

    fn get_by_id(&self, id: &WasteId) -> Result<Option<WasteItem>, RepositoryError> {
        Ok(self.items()?.iter().find(|item| item.id() == id).cloned())
    }

    fn update<T, F>(&self, id: &WasteId, apply: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut WasteItem) -> T,
    {
        let mut guard = self.items()?;
        Ok(guard.iter_mut().find(|item| item.id() == id).map(apply))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.items()?.len())
    }
}
