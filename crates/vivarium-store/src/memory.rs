//! In-process pet store: a keyed arena behind an async read-write lock.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use vivarium_types::{OwnerId, Pet, PetId};

use crate::error::StoreError;
use crate::PetStore;

/// Arena state: the records plus the per-owner active pointer.
#[derive(Debug, Default)]
struct Inner {
    pets: BTreeMap<PetId, Pet>,
    active: BTreeMap<OwnerId, PetId>,
}

/// An in-process [`PetStore`] backed by a [`BTreeMap`] arena.
///
/// Never fails with [`StoreError::Unavailable`]; it exists as the
/// reference semantics for the seam and as the store for tests and local
/// runs.
#[derive(Debug, Default)]
pub struct MemoryPetStore {
    inner: RwLock<Inner>,
}

impl MemoryPetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn get(&self, id: PetId) -> Result<Pet, StoreError> {
        let inner = self.inner.read().await;
        inner.pets.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn put(&self, pet: Pet) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.pets.insert(pet.id, pet);
        Ok(())
    }

    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<Pet>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .pets
            .values()
            .filter(|pet| pet.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn count_by_owner(&self, owner: OwnerId) -> Result<u32, StoreError> {
        let inner = self.inner.read().await;
        let count = inner
            .pets
            .values()
            .filter(|pet| pet.owner_id == owner)
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn set_active(&self, owner: OwnerId, pet: PetId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let owned = inner
            .pets
            .get(&pet)
            .is_some_and(|record| record.owner_id == owner);
        if !owned {
            return Err(StoreError::NotFound(pet));
        }
        inner.active.insert(owner, pet);
        Ok(())
    }

    async fn active_pet_of(&self, owner: OwnerId) -> Result<Option<PetId>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.active.get(&owner).copied())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use vivarium_types::{
        EvolutionStage, Personality, PetStatus, Rarity, Species, Vitals,
    };

    use super::*;

    fn test_pet(owner: OwnerId) -> Pet {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        Pet {
            id: PetId::new(),
            owner_id: owner,
            name: String::from("Pepper"),
            species: Species::Cat,
            personality: Personality::Playful,
            rarity: Rarity::Common,
            level: 1,
            experience: 0,
            evolution_stage: EvolutionStage::Baby,
            status: PetStatus::Active,
            vitals: Vitals::from_points(70, 70, 100, 100, 100),
            sleep_until: None,
            hunger_depleted_since: None,
            happiness_depleted_since: None,
            created_at: t,
            last_updated_at: t,
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryPetStore::new();
        let pet = test_pet(OwnerId::new());
        store.put(pet.clone()).await.unwrap();
        let fetched = store.get(pet.id).await.unwrap();
        assert_eq!(fetched, pet);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let store = MemoryPetStore::new();
        let id = PetId::new();
        assert_eq!(store.get(id).await, Err(StoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn list_and_count_scope_to_owner() {
        let store = MemoryPetStore::new();
        let owner = OwnerId::new();
        let stranger = OwnerId::new();
        store.put(test_pet(owner)).await.unwrap();
        store.put(test_pet(owner)).await.unwrap();
        store.put(test_pet(stranger)).await.unwrap();

        assert_eq!(store.count_by_owner(owner).await.unwrap(), 2);
        assert_eq!(store.list_by_owner(owner).await.unwrap().len(), 2);
        assert_eq!(store.count_by_owner(stranger).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn one_active_pet_per_owner() {
        let store = MemoryPetStore::new();
        let owner = OwnerId::new();
        let first = test_pet(owner);
        let second = test_pet(owner);
        store.put(first.clone()).await.unwrap();
        store.put(second.clone()).await.unwrap();

        store.set_active(owner, first.id).await.unwrap();
        assert_eq!(store.active_pet_of(owner).await.unwrap(), Some(first.id));

        // Re-pointing replaces, never duplicates.
        store.set_active(owner, second.id).await.unwrap();
        assert_eq!(store.active_pet_of(owner).await.unwrap(), Some(second.id));
    }

    #[tokio::test]
    async fn set_active_rejects_foreign_pets() {
        let store = MemoryPetStore::new();
        let owner = OwnerId::new();
        let stranger_pet = test_pet(OwnerId::new());
        store.put(stranger_pet.clone()).await.unwrap();

        let result = store.set_active(owner, stranger_pet.id).await;
        assert_eq!(result, Err(StoreError::NotFound(stranger_pet.id)));
        assert_eq!(store.active_pet_of(owner).await.unwrap(), None);
    }
}
