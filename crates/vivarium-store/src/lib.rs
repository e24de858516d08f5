//! Storage seam for pet records.
//!
//! The engine owns no persistence: it reads and writes whole [`Pet`]
//! records through the [`PetStore`] trait and treats the implementation as
//! a strongly-consistent-per-key collaborator. This crate defines that
//! seam plus [`MemoryPetStore`], an in-process arena used by tests, local
//! development, and as the reference semantics for database-backed
//! implementations.
//!
//! The store -- not the engine -- enforces the "exactly one active pet per
//! owner" pointer, since it is a cross-record constraint on storage state.

pub mod error;
pub mod memory;

use async_trait::async_trait;
use vivarium_types::{OwnerId, Pet, PetId};

pub use error::StoreError;
pub use memory::MemoryPetStore;

/// Durable keyed storage of pet records, strongly consistent per key.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Fetch the record for a pet.
    async fn get(&self, id: PetId) -> Result<Pet, StoreError>;

    /// Write (insert or replace) a pet record.
    async fn put(&self, pet: Pet) -> Result<(), StoreError>;

    /// All pets belonging to an owner, dead ones included.
    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<Pet>, StoreError>;

    /// How many pets an owner holds, dead ones included.
    async fn count_by_owner(&self, owner: OwnerId) -> Result<u32, StoreError>;

    /// Point the owner's single active-pet slot at the given pet.
    ///
    /// Fails with [`StoreError::NotFound`] if the pet does not exist or
    /// does not belong to the owner.
    async fn set_active(&self, owner: OwnerId, pet: PetId) -> Result<(), StoreError>;

    /// The owner's active pet, if one is set.
    async fn active_pet_of(&self, owner: OwnerId) -> Result<Option<PetId>, StoreError>;
}
