//! The status state machine: derives the categorical status from vitals.
//!
//! Runs after every decay+action cycle. Transitions:
//!
//! - any state -> dead when health reaches zero (terminal, no way out)
//! - active <-> sleeping via the explicit sleep/wake actions (and natural
//!   timer expiry, handled by the decay clock)
//! - active -> sick when health drops below the entry threshold; sick ->
//!   active once health climbs past the exit threshold (hysteresis)
//! - active/sick -> depressed when happiness has sat at zero for the
//!   configured duration; depressed -> active once happiness recovers
//!
//! For awake pets, simultaneous crossings resolve by priority
//! dead > sick > depressed > active: health-critical states dominate. A
//! sleeping pet is only ever interrupted by death -- its vitals are frozen,
//! so neither sickness nor depression can advance while it sleeps.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use vivarium_types::{Pet, PetStatus};

use crate::config::StatusConfig;

/// Re-derive the pet's status from its normalized vitals.
///
/// Returns the transition as `(from, to)` when the status changed.
pub fn evaluate(
    pet: &mut Pet,
    now: DateTime<Utc>,
    config: &StatusConfig,
) -> Option<(PetStatus, PetStatus)> {
    let current = pet.status;
    let next = next_status(pet, now, config);

    if next == PetStatus::Dead {
        // Death is terminal; a corpse keeps no wake timer.
        pet.sleep_until = None;
    }

    if next == current {
        return None;
    }
    debug!(pet_id = %pet.id, from = %current, to = %next, "status transition");
    pet.status = next;
    Some((current, next))
}

fn next_status(pet: &Pet, now: DateTime<Utc>, config: &StatusConfig) -> PetStatus {
    // Terminal state first: nothing leaves dead, and zero health enters it.
    if pet.status == PetStatus::Dead || pet.vitals.health == Decimal::ZERO {
        return PetStatus::Dead;
    }

    // A live sleep timer owns the status; frozen vitals cannot cross any
    // other threshold underneath it.
    if let Some(until) = pet.sleep_until
        && until > now
    {
        return PetStatus::Sleeping;
    }

    // Sick dominates depressed.
    let health = pet.vitals.health;
    let enters_sick = health < Decimal::from(config.sick_enter_below);
    let stays_sick =
        pet.status == PetStatus::Sick && health <= Decimal::from(config.sick_exit_above);
    if enters_sick || stays_sick {
        return PetStatus::Sick;
    }

    let happiness = pet.vitals.happiness;
    let enters_depressed = pet.happiness_depleted_since.is_some_and(|since| {
        u64::try_from(now.signed_duration_since(since).num_seconds()).unwrap_or(0)
            >= config.depressed_after_secs
    });
    let stays_depressed = pet.status == PetStatus::Depressed
        && happiness <= Decimal::from(config.depressed_exit_above);
    if enters_depressed || stays_depressed {
        return PetStatus::Depressed;
    }

    PetStatus::Active
}
