//! The pet lifecycle service: the only path that mutates a pet.
//!
//! Every mutating request runs the same pipeline under that pet's lock:
//!
//! 1. load the record through the store
//! 2. decay -- fold elapsed time in ([`vivarium_pets::decay::normalize`])
//! 3. the requested action, if any ([`vivarium_pets::actions`])
//! 4. progression ([`vivarium_pets::progression::apply_xp`])
//! 5. status re-derivation ([`vivarium_pets::status::evaluate`])
//! 6. persist and answer from the same record
//!
//! A per-pet async mutex serializes steps 1-6, so two requests for the
//! same pet can never double-count elapsed time; requests for different
//! pets proceed in parallel. Validation failures surface before anything
//! is persisted, so an error always means "stored state unchanged".

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use vivarium_pets::config::BalanceConfig;
use vivarium_pets::progression::LevelUp;
use vivarium_pets::{actions, decay, factory, progression, projection, status};
use vivarium_store::PetStore;
use vivarium_types::{ActionKind, ActionOutcome, OwnerId, Pet, PetId, PetSnapshot, VitalDelta};

use crate::clock::Clock;
use crate::error::EngineError;

/// The engine facade the transport layer talks to.
pub struct PetService {
    store: Arc<dyn PetStore>,
    clock: Arc<dyn Clock>,
    balance: BalanceConfig,
    /// One mutex per pet; the registry itself is guarded by an outer lock.
    locks: Mutex<BTreeMap<PetId, Arc<Mutex<()>>>>,
    /// Serializes adoptions so the per-owner cap cannot be raced past.
    create_lock: Mutex<()>,
}

impl PetService {
    /// Build a service over a store, a clock and the balance tunables.
    pub fn new(store: Arc<dyn PetStore>, clock: Arc<dyn Clock>, balance: BalanceConfig) -> Self {
        Self {
            store,
            clock,
            balance,
            locks: Mutex::new(BTreeMap::new()),
            create_lock: Mutex::new(()),
        }
    }

    /// The per-pet mutex, created on first use.
    async fn lock_for(&self, id: PetId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(id).or_default())
    }

    /// Fetch a pet and verify ownership.
    ///
    /// A pet that exists but belongs to someone else reports `NotFound`,
    /// so ownership is never leaked through error responses.
    async fn load_owned(&self, owner: OwnerId, id: PetId) -> Result<Pet, EngineError> {
        let pet = self.store.get(id).await?;
        if pet.owner_id != owner {
            return Err(EngineError::NotFound(id));
        }
        Ok(pet)
    }

    /// Adopt a new pet for an owner.
    ///
    /// Parses the species and personality tags, enforces the per-owner
    /// cap, rolls rarity, and persists the newborn record. The owner's
    /// first pet automatically becomes their active pet.
    pub async fn create_pet(
        &self,
        owner: OwnerId,
        name: String,
        species_tag: &str,
        personality_tag: &str,
    ) -> Result<Pet, EngineError> {
        let _guard = self.create_lock.lock().await;

        let held = self.store.count_by_owner(owner).await?;
        let limit = self.balance.limits.max_pets_per_owner;
        if held >= limit {
            return Err(EngineError::PetLimitReached { limit });
        }

        let pet = {
            let mut rng = rand::rng();
            factory::create_pet(
                owner,
                name,
                species_tag,
                personality_tag,
                self.clock.now(),
                &self.balance,
                &mut rng,
            )?
        };
        self.store.put(pet.clone()).await?;

        if self.store.active_pet_of(owner).await?.is_none() {
            self.store.set_active(owner, pet.id).await?;
        }

        info!(pet_id = %pet.id, owner_id = %owner, "pet created");
        Ok(pet)
    }

    /// Run the full decay -> action -> progression -> status pipeline.
    pub async fn resolve_action(
        &self,
        owner: OwnerId,
        pet_id: PetId,
        kind: ActionKind,
    ) -> Result<ActionOutcome, EngineError> {
        let lock = self.lock_for(pet_id).await;
        let _guard = lock.lock().await;

        let mut pet = self.load_owned(owner, pet_id).await?;
        let now = self.clock.now();

        decay::normalize(&mut pet, now, &self.balance);
        let effects = actions::resolve(&mut pet, kind, now, &self.balance)?;
        let level_up = progression::apply_xp(&mut pet, effects.xp_gained, &self.balance.progression);
        status::evaluate(&mut pet, now, &self.balance.status);

        self.store.put(pet.clone()).await?;
        debug!(pet_id = %pet.id, action = %kind, status = %pet.status, "action resolved");
        Ok(outcome(&pet, level_up))
    }

    /// Passive read: decay-only pipeline, persisted, full projection.
    pub async fn snapshot(&self, owner: OwnerId, pet_id: PetId) -> Result<PetSnapshot, EngineError> {
        let lock = self.lock_for(pet_id).await;
        let _guard = lock.lock().await;

        let mut pet = self.load_owned(owner, pet_id).await?;
        let now = self.clock.now();

        decay::normalize(&mut pet, now, &self.balance);
        status::evaluate(&mut pet, now, &self.balance.status);

        self.store.put(pet.clone()).await?;
        Ok(projection::snapshot(&pet, now, &self.balance))
    }

    /// Apply an item-translated vital delta through the same pipeline.
    ///
    /// This is the entry point the item catalog collaborator calls after
    /// mapping an inventory item to a [`VitalDelta`]. No experience is
    /// granted; status is re-derived so medicine can clear sickness.
    pub async fn apply_item_effect(
        &self,
        owner: OwnerId,
        pet_id: PetId,
        delta: VitalDelta,
    ) -> Result<ActionOutcome, EngineError> {
        let lock = self.lock_for(pet_id).await;
        let _guard = lock.lock().await;

        let mut pet = self.load_owned(owner, pet_id).await?;
        let now = self.clock.now();

        decay::normalize(&mut pet, now, &self.balance);
        actions::apply_delta(&mut pet, delta)?;
        status::evaluate(&mut pet, now, &self.balance.status);

        self.store.put(pet.clone()).await?;
        Ok(outcome(&pet, LevelUp::NONE))
    }

    /// Point the owner's active-pet slot at one of their living pets.
    pub async fn set_active_pet(&self, owner: OwnerId, pet_id: PetId) -> Result<(), EngineError> {
        let pet = self.load_owned(owner, pet_id).await?;
        if !pet.is_alive() {
            return Err(EngineError::Care(vivarium_pets::PetError::InvalidState {
                status: pet.status,
            }));
        }
        self.store.set_active(owner, pet_id).await?;
        Ok(())
    }

    /// The owner's active pet as a full snapshot, if one is set.
    pub async fn active_pet(&self, owner: OwnerId) -> Result<Option<PetSnapshot>, EngineError> {
        let Some(id) = self.store.active_pet_of(owner).await? else {
            return Ok(None);
        };
        self.snapshot(owner, id).await.map(Some)
    }

    /// All of the owner's pets as read-only projections.
    ///
    /// Unlike [`snapshot`](Self::snapshot) this does not persist the
    /// decayed records -- it projects the last committed state forward,
    /// which is safe because decay is a pure function of (record, now).
    pub async fn list_pets(&self, owner: OwnerId) -> Result<Vec<PetSnapshot>, EngineError> {
        let now = self.clock.now();
        let pets = self.store.list_by_owner(owner).await?;
        Ok(pets
            .into_iter()
            .map(|mut pet| {
                decay::normalize(&mut pet, now, &self.balance);
                status::evaluate(&mut pet, now, &self.balance.status);
                projection::snapshot(&pet, now, &self.balance)
            })
            .collect())
    }
}

/// Assemble the action outcome from the committed record.
fn outcome(pet: &Pet, level_up: LevelUp) -> ActionOutcome {
    ActionOutcome {
        vitals: pet.vitals.view(),
        status: pet.status,
        leveled_up: level_up.leveled_up,
        new_level: level_up.new_level,
        sleep_until: pet.sleep_until,
    }
}
