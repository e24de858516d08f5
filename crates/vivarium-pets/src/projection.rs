//! Read-side projections: the full pet snapshot and its derived scores.
//!
//! Everything here is computed from the stored minimal fields at read time.
//! Nothing is persisted, so none of it can drift.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vivarium_types::{Pet, PetSnapshot, PetStatus};

use crate::battle;
use crate::config::BalanceConfig;
use crate::progression;

/// Minimum energy a battle system will accept.
const BATTLE_MIN_ENERGY: u32 = 20;

/// Minimum health a battle system will accept.
const BATTLE_MIN_HEALTH: u32 = 30;

/// Build the full snapshot for an already-normalized pet.
pub fn snapshot(pet: &Pet, now: DateTime<Utc>, config: &BalanceConfig) -> PetSnapshot {
    let vitals = pet.vitals.view();
    PetSnapshot {
        id: pet.id,
        name: pet.name.clone(),
        species: pet.species,
        personality: pet.personality,
        rarity: pet.rarity,
        level: pet.level,
        experience: pet.experience,
        exp_to_next_level: progression::xp_threshold(config.progression.xp_base, pet.level),
        exp_progress_percent: progression::exp_progress_percent(
            pet.experience,
            pet.level,
            &config.progression,
        ),
        evolution_stage: pet.evolution_stage,
        vitals,
        battle_stats: battle::derive(pet, &config.rarity),
        status: pet.status,
        overall_wellbeing: overall_wellbeing(pet),
        can_battle: can_battle(pet),
        age_days: age_days(pet, now),
        sleep_until: pet.sleep_until,
    }
}

/// A single weighted wellbeing score over the five vitals.
///
/// Weights: hunger 25%, happiness 25%, health 20%, energy 15%, hygiene 15%.
pub fn overall_wellbeing(pet: &Pet) -> u32 {
    let v = pet.vitals.view();
    let weighted = u64::from(v.hunger)
        .saturating_mul(25)
        .saturating_add(u64::from(v.happiness).saturating_mul(25))
        .saturating_add(u64::from(v.health).saturating_mul(20))
        .saturating_add(u64::from(v.energy).saturating_mul(15))
        .saturating_add(u64::from(v.hygiene).saturating_mul(15));
    u32::try_from(weighted.checked_div(100).unwrap_or(0)).unwrap_or(0)
}

/// Whether a battle system would accept this pet right now.
pub fn can_battle(pet: &Pet) -> bool {
    pet.is_alive()
        && pet.status != PetStatus::Sleeping
        && pet.vitals.energy >= Decimal::from(BATTLE_MIN_ENERGY)
        && pet.vitals.health >= Decimal::from(BATTLE_MIN_HEALTH)
}

/// Whole days since adoption.
pub fn age_days(pet: &Pet, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(pet.created_at).num_days().max(0)
}
