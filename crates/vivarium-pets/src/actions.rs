//! Care action resolution: validate, then apply, never halfway.
//!
//! Each action checks every precondition against the already-normalized
//! record before touching it, so a returned error guarantees the pet is
//! exactly as it was. The experience a successful action earns is returned
//! to the caller, which routes it through progression inside the same
//! atomic update.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::prelude::ToPrimitive;
use vivarium_types::{ActionKind, Personality, Pet, PetStatus, VitalDelta};

use crate::config::BalanceConfig;
use crate::decay;
use crate::error::PetError;
use crate::vital_math;

/// What a successfully resolved action produced beyond the vital changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEffects {
    /// Experience earned, to be folded in by progression.
    pub xp_gained: u64,
}

/// Resolve one care action against a normalized pet record.
///
/// On success the pet's vitals (and, for sleep/wake, its status and timer)
/// are updated and the earned experience is returned. On failure nothing
/// is mutated.
pub fn resolve(
    pet: &mut Pet,
    kind: ActionKind,
    now: DateTime<Utc>,
    config: &BalanceConfig,
) -> Result<ActionEffects, PetError> {
    match kind {
        ActionKind::Feed => feed(pet, config),
        ActionKind::Pet => pet_affection(pet, config),
        ActionKind::Play => play(pet, config),
        ActionKind::Sleep => sleep(pet, now, config),
        ActionKind::Wake => wake(pet, now, config),
    }
}

/// Refuse any action while sleeping or dead.
const fn require_awake(pet: &Pet) -> Result<(), PetError> {
    match pet.status {
        PetStatus::Sleeping | PetStatus::Dead => Err(PetError::InvalidState {
            status: pet.status,
        }),
        PetStatus::Active | PetStatus::Sick | PetStatus::Depressed => Ok(()),
    }
}

fn feed(pet: &mut Pet, config: &BalanceConfig) -> Result<ActionEffects, PetError> {
    require_awake(pet)?;

    pet.vitals.hunger = vital_math::add_points(pet.vitals.hunger, config.actions.feed_hunger);
    pet.vitals.happiness =
        vital_math::add_points(pet.vitals.happiness, config.actions.feed_happiness_bonus);
    decay::clear_stale_depletion_stamps(pet);

    Ok(ActionEffects {
        xp_gained: config.actions.feed_xp,
    })
}

fn pet_affection(pet: &mut Pet, config: &BalanceConfig) -> Result<ActionEffects, PetError> {
    require_awake(pet)?;

    let mut amount = config.actions.pet_happiness;
    if pet.personality == Personality::Affectionate {
        amount = amount.saturating_add(config.actions.affectionate_pet_bonus);
    }
    pet.vitals.happiness = vital_math::add_points(pet.vitals.happiness, amount);
    decay::clear_stale_depletion_stamps(pet);

    Ok(ActionEffects { xp_gained: 0 })
}

fn play(pet: &mut Pet, config: &BalanceConfig) -> Result<ActionEffects, PetError> {
    require_awake(pet)?;

    let cost = config.actions.play_energy_cost;
    let available = pet.vitals.energy.trunc().to_u32().unwrap_or(0);
    if pet.vitals.energy < rust_decimal::Decimal::from(cost) {
        return Err(PetError::InsufficientEnergy {
            required: cost,
            available,
        });
    }

    pet.vitals.happiness =
        vital_math::add_points(pet.vitals.happiness, config.actions.play_happiness);
    pet.vitals.energy = vital_math::sub_points(pet.vitals.energy, cost);
    decay::clear_stale_depletion_stamps(pet);

    let xp = if pet.personality == Personality::Clever {
        u64::from(config.actions.clever_play_xp_pct)
            .checked_mul(config.actions.play_xp)
            .map_or(config.actions.play_xp, |scaled| scaled.checked_div(100).unwrap_or(0))
    } else {
        config.actions.play_xp
    };

    Ok(ActionEffects { xp_gained: xp })
}

fn sleep(
    pet: &mut Pet,
    now: DateTime<Utc>,
    config: &BalanceConfig,
) -> Result<ActionEffects, PetError> {
    require_awake(pet)?;

    let duration = TimeDelta::try_seconds(
        i64::try_from(config.actions.sleep_duration_secs).unwrap_or(i64::MAX),
    )
    .unwrap_or_default();
    pet.sleep_until = now.checked_add_signed(duration).or(Some(DateTime::<Utc>::MAX_UTC));
    pet.status = PetStatus::Sleeping;

    Ok(ActionEffects { xp_gained: 0 })
}

fn wake(
    pet: &mut Pet,
    now: DateTime<Utc>,
    config: &BalanceConfig,
) -> Result<ActionEffects, PetError> {
    if pet.status != PetStatus::Sleeping {
        return Err(PetError::NotSleeping);
    }

    // The energy bonus scales with how much of the sleep was actually
    // slept: a full night earns the whole bonus, an immediate wake almost
    // nothing. The decay clock has already credited regeneration up to
    // `now`.
    let duration = config.actions.sleep_duration_secs;
    let remaining = pet
        .sleep_until
        .map_or(0, |until| {
            u64::try_from(until.signed_duration_since(now).num_seconds()).unwrap_or(0)
        })
        .min(duration);
    let slept = duration.checked_sub(remaining).unwrap_or(0);
    let bonus = if duration == 0 {
        u64::from(config.actions.wake_energy_bonus)
    } else {
        u64::from(config.actions.wake_energy_bonus)
            .checked_mul(slept)
            .map_or(0, |scaled| scaled.checked_div(duration).unwrap_or(0))
    };
    let bonus = u32::try_from(bonus).unwrap_or(u32::MAX);

    pet.vitals.energy = vital_math::add_points(pet.vitals.energy, bonus);
    pet.sleep_until = None;
    pet.status = PetStatus::Active;

    Ok(ActionEffects { xp_gained: 0 })
}

/// Apply a signed vital adjustment from an external collaborator.
///
/// This is how the item catalog reaches the vitals: medicine raises
/// health, treats raise hunger, soap raises hygiene. Each component is
/// clamped into the vital range. Items work on sleeping pets (medicine
/// does not require waking the patient) but never on dead ones.
pub fn apply_delta(pet: &mut Pet, delta: VitalDelta) -> Result<(), PetError> {
    if pet.status == PetStatus::Dead {
        return Err(PetError::InvalidState {
            status: PetStatus::Dead,
        });
    }

    pet.vitals.hunger = shift(pet.vitals.hunger, delta.hunger);
    pet.vitals.happiness = shift(pet.vitals.happiness, delta.happiness);
    pet.vitals.health = shift(pet.vitals.health, delta.health);
    pet.vitals.energy = shift(pet.vitals.energy, delta.energy);
    pet.vitals.hygiene = shift(pet.vitals.hygiene, delta.hygiene);
    decay::clear_stale_depletion_stamps(pet);

    Ok(())
}

/// Apply one signed component of a delta, clamped.
fn shift(value: rust_decimal::Decimal, points: i32) -> rust_decimal::Decimal {
    if points >= 0 {
        vital_math::add_points(value, u32::try_from(points).unwrap_or(0))
    } else {
        vital_math::sub_points(value, points.unsigned_abs())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use vivarium_types::{EvolutionStage, OwnerId, PetId, Rarity, Species, Vitals};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn test_pet() -> Pet {
        Pet {
            id: PetId::new(),
            owner_id: OwnerId::new(),
            name: String::from("Nori"),
            species: Species::Dog,
            personality: Personality::Brave,
            rarity: Rarity::Common,
            level: 1,
            experience: 0,
            evolution_stage: EvolutionStage::Baby,
            status: PetStatus::Active,
            vitals: Vitals::from_points(70, 70, 100, 100, 100),
            sleep_until: None,
            hunger_depleted_since: None,
            happiness_depleted_since: None,
            created_at: now(),
            last_updated_at: now(),
        }
    }

    #[test]
    fn feed_raises_hunger_and_grants_xp() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        let effects = resolve(&mut pet, ActionKind::Feed, now(), &cfg).unwrap();
        assert_eq!(pet.vitals.view().hunger, 95); // 70 + 25
        assert_eq!(pet.vitals.view().happiness, 75); // +5 bonus
        assert_eq!(effects.xp_gained, 5);
    }

    #[test]
    fn feed_clamps_at_one_hundred() {
        let mut pet = test_pet();
        pet.vitals.hunger = Decimal::from(90_u32);
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Feed, now(), &cfg).unwrap();
        assert_eq!(pet.vitals.view().hunger, 100);
    }

    #[test]
    fn feed_clears_hunger_depletion_stamp() {
        let mut pet = test_pet();
        pet.vitals.hunger = Decimal::ZERO;
        pet.hunger_depleted_since = Some(now());
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Feed, now(), &cfg).unwrap();
        assert_eq!(pet.hunger_depleted_since, None);
    }

    #[test]
    fn feed_refused_while_sleeping() {
        let mut pet = test_pet();
        pet.status = PetStatus::Sleeping;
        pet.sleep_until = Some(now());
        let before = pet.clone();
        let cfg = BalanceConfig::default();
        let err = resolve(&mut pet, ActionKind::Feed, now(), &cfg).unwrap_err();
        assert_eq!(
            err,
            PetError::InvalidState {
                status: PetStatus::Sleeping
            }
        );
        assert_eq!(pet, before);
    }

    #[test]
    fn feed_refused_when_dead() {
        let mut pet = test_pet();
        pet.status = PetStatus::Dead;
        let cfg = BalanceConfig::default();
        let err = resolve(&mut pet, ActionKind::Feed, now(), &cfg).unwrap_err();
        assert_eq!(
            err,
            PetError::InvalidState {
                status: PetStatus::Dead
            }
        );
    }

    #[test]
    fn sick_pets_can_still_be_fed() {
        let mut pet = test_pet();
        pet.status = PetStatus::Sick;
        let cfg = BalanceConfig::default();
        assert!(resolve(&mut pet, ActionKind::Feed, now(), &cfg).is_ok());
    }

    #[test]
    fn petting_rewards_affectionate_pets_more() {
        let cfg = BalanceConfig::default();
        let mut plain = test_pet();
        resolve(&mut plain, ActionKind::Pet, now(), &cfg).unwrap();
        assert_eq!(plain.vitals.view().happiness, 72);

        let mut cuddly = test_pet();
        cuddly.personality = Personality::Affectionate;
        resolve(&mut cuddly, ActionKind::Pet, now(), &cfg).unwrap();
        assert_eq!(cuddly.vitals.view().happiness, 73);
    }

    #[test]
    fn play_costs_energy_and_grants_xp() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        let effects = resolve(&mut pet, ActionKind::Play, now(), &cfg).unwrap();
        assert_eq!(pet.vitals.view().happiness, 90); // 70 + 20
        assert_eq!(pet.vitals.view().energy, 85); // 100 - 15
        assert_eq!(effects.xp_gained, 10);
    }

    #[test]
    fn clever_pets_earn_more_play_xp() {
        let mut pet = test_pet();
        pet.personality = Personality::Clever;
        let cfg = BalanceConfig::default();
        let effects = resolve(&mut pet, ActionKind::Play, now(), &cfg).unwrap();
        assert_eq!(effects.xp_gained, 12); // 10 * 120%
    }

    #[test]
    fn play_with_too_little_energy_changes_nothing() {
        let mut pet = test_pet();
        pet.vitals.energy = Decimal::from(5_u32);
        let before = pet.clone();
        let cfg = BalanceConfig::default();
        let err = resolve(&mut pet, ActionKind::Play, now(), &cfg).unwrap_err();
        assert_eq!(
            err,
            PetError::InsufficientEnergy {
                required: 15,
                available: 5
            }
        );
        assert_eq!(pet, before);
    }

    #[test]
    fn sleep_sets_status_and_timer() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Sleep, now(), &cfg).unwrap();
        assert_eq!(pet.status, PetStatus::Sleeping);
        let until = pet.sleep_until.unwrap();
        assert_eq!(until.signed_duration_since(now()).num_seconds(), 4 * 3600);
    }

    #[test]
    fn sleep_refused_while_already_sleeping() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Sleep, now(), &cfg).unwrap();
        let err = resolve(&mut pet, ActionKind::Sleep, now(), &cfg).unwrap_err();
        assert_eq!(
            err,
            PetError::InvalidState {
                status: PetStatus::Sleeping
            }
        );
    }

    #[test]
    fn wake_requires_sleeping() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        let err = resolve(&mut pet, ActionKind::Wake, now(), &cfg).unwrap_err();
        assert_eq!(err, PetError::NotSleeping);
    }

    #[test]
    fn immediate_wake_round_trip_restores_active() {
        let mut pet = test_pet();
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Sleep, now(), &cfg).unwrap();
        resolve(&mut pet, ActionKind::Wake, now(), &cfg).unwrap();
        assert_eq!(pet.status, PetStatus::Active);
        assert_eq!(pet.sleep_until, None);
        // No time slept, no bonus.
        assert_eq!(pet.vitals.view().energy, 100);
    }

    #[test]
    fn medicine_delta_raises_health_clamped() {
        let mut pet = test_pet();
        pet.vitals.health = Decimal::from(90_u32);
        let delta = VitalDelta {
            health: 25,
            ..VitalDelta::default()
        };
        apply_delta(&mut pet, delta).unwrap();
        assert_eq!(pet.vitals.view().health, 100);
    }

    #[test]
    fn negative_delta_floors_at_zero() {
        let mut pet = test_pet();
        let delta = VitalDelta {
            hygiene: -200,
            ..VitalDelta::default()
        };
        apply_delta(&mut pet, delta).unwrap();
        assert_eq!(pet.vitals.view().hygiene, 0);
    }

    #[test]
    fn items_work_on_sleeping_pets_but_not_dead_ones() {
        let cfg = BalanceConfig::default();
        let mut sleeper = test_pet();
        resolve(&mut sleeper, ActionKind::Sleep, now(), &cfg).unwrap();
        assert!(apply_delta(&mut sleeper, VitalDelta::default()).is_ok());

        let mut corpse = test_pet();
        corpse.status = PetStatus::Dead;
        let err = apply_delta(&mut corpse, VitalDelta::default()).unwrap_err();
        assert_eq!(
            err,
            PetError::InvalidState {
                status: PetStatus::Dead
            }
        );
    }

    #[test]
    fn wake_bonus_scales_with_time_slept() {
        let mut pet = test_pet();
        pet.vitals.energy = Decimal::from(40_u32);
        let cfg = BalanceConfig::default();
        resolve(&mut pet, ActionKind::Sleep, now(), &cfg).unwrap();
        // Wake halfway through the 4h sleep: half of the 30-point bonus.
        let later = now()
            .checked_add_signed(TimeDelta::seconds(2 * 3600))
            .unwrap();
        resolve(&mut pet, ActionKind::Wake, later, &cfg).unwrap();
        assert_eq!(pet.vitals.view().energy, 55); // 40 + 15
        assert_eq!(pet.status, PetStatus::Active);
    }
}
