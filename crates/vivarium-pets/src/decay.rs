//! The stat decay clock: makes vitals a function of elapsed wall-clock time.
//!
//! [`normalize`] is the first thing every operation runs, exactly once per
//! request. It folds the time since `last_updated_at` into the record and
//! advances the anchor to `now`, so no elapsed second is ever counted twice.
//!
//! Rules:
//! - Awake (active, sick, depressed): hunger, happiness, energy and hygiene
//!   decay at their configured hourly rates. Health decays only through the
//!   neglect rule -- hunger or happiness sitting at zero beyond the grace
//!   period.
//! - Sleeping: nothing decays; energy regenerates. A sleep whose timer has
//!   expired is split at `sleep_until`: regeneration up to the expiry, an
//!   automatic wake (with the full wake bonus), then normal decay for the
//!   remainder of the window.
//! - Dead: fully frozen.
//!
//! The function is total: it cannot fail, only clamp.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use vivarium_types::{Personality, Pet, PetStatus};

use crate::config::BalanceConfig;
use crate::vital_math;

/// What the clock did beyond plain decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayOutcome {
    /// The sleep timer expired inside the window and the pet woke up.
    pub auto_woke: bool,
}

/// Fold elapsed time into the pet record and advance the decay anchor.
pub fn normalize(pet: &mut Pet, now: DateTime<Utc>, config: &BalanceConfig) -> DecayOutcome {
    let anchor = pet.last_updated_at;
    let elapsed = elapsed_secs(anchor, now);
    let mut outcome = DecayOutcome { auto_woke: false };

    if elapsed == 0 || pet.status == PetStatus::Dead {
        pet.last_updated_at = now;
        return outcome;
    }

    if pet.status == PetStatus::Sleeping {
        match pet.sleep_until {
            // Still asleep: regenerate, keep the depletion stamps paused.
            Some(until) if now < until => {
                regenerate_asleep(pet, elapsed, config);
                shift_depletion_stamps(pet, elapsed);
            }
            // Timer expired inside the window: split it at the expiry.
            Some(until) => {
                let slept = elapsed_secs(anchor, until);
                regenerate_asleep(pet, slept, config);
                shift_depletion_stamps(pet, slept);
                pet.vitals.energy =
                    vital_math::add_points(pet.vitals.energy, config.actions.wake_energy_bonus);
                pet.sleep_until = None;
                pet.status = PetStatus::Active;
                outcome.auto_woke = true;
                let awake_start = if until > anchor { until } else { anchor };
                decay_awake(pet, awake_start, elapsed_secs(awake_start, now), config);
            }
            // A sleeping status without a timer is treated as awake.
            None => decay_awake(pet, anchor, elapsed, config),
        }
    } else {
        decay_awake(pet, anchor, elapsed, config);
    }

    pet.last_updated_at = now;
    outcome
}

/// Seconds from `from` to `to`, floored at zero (a backwards clock is
/// treated as no elapsed time).
fn elapsed_secs(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from(to.signed_duration_since(from).num_seconds()).unwrap_or(0)
}

/// Energy regeneration for a sleeping span.
fn regenerate_asleep(pet: &mut Pet, secs: u64, config: &BalanceConfig) {
    let gain = vital_math::points_over(config.decay.sleep_energy_regen_per_hour, secs);
    pet.vitals.energy = vital_math::add(pet.vitals.energy, gain);
}

/// Move both depletion stamps forward by a slept span, pausing neglect and
/// depression accumulation while nothing can decay.
fn shift_depletion_stamps(pet: &mut Pet, secs: u64) {
    let delta =
        TimeDelta::try_seconds(i64::try_from(secs).unwrap_or(i64::MAX)).unwrap_or_default();
    pet.hunger_depleted_since = pet
        .hunger_depleted_since
        .and_then(|s| s.checked_add_signed(delta));
    pet.happiness_depleted_since = pet
        .happiness_depleted_since
        .and_then(|s| s.checked_add_signed(delta));
}

/// Apply awake decay over `[window_start, window_start + secs]`.
fn decay_awake(pet: &mut Pet, window_start: DateTime<Utc>, secs: u64, config: &BalanceConfig) {
    if secs == 0 {
        return;
    }

    let happiness_pct = happiness_decay_pct(pet.personality, config);

    // A vital that is above zero at the window start is not depleted,
    // whatever an older stamp claims (feeding clears stamps too; this is
    // the authoritative check).
    clear_stale_depletion_stamps(pet);

    // When (if at all) hunger and happiness bottom out in this window.
    let hunger_zero_at = depletion_instant(
        window_start,
        pet.vitals.hunger,
        config.decay.hunger_per_hour,
        100,
        secs,
    );
    let happiness_zero_at = depletion_instant(
        window_start,
        pet.vitals.happiness,
        config.decay.happiness_per_hour,
        happiness_pct,
        secs,
    );

    // A stamp set in an earlier window survives; a fresh bottom sets one.
    if pet.hunger_depleted_since.is_none() {
        pet.hunger_depleted_since = hunger_zero_at;
    }
    if pet.happiness_depleted_since.is_none() {
        pet.happiness_depleted_since = happiness_zero_at;
    }

    // Neglect: health decays from the earliest grace-expired stamp onward.
    let window_end = add_secs(window_start, secs);
    let grace = config.decay.neglect_grace_secs;
    let damage_start = [pet.hunger_depleted_since, pet.happiness_depleted_since]
        .into_iter()
        .flatten()
        .map(|stamp| add_secs(stamp, grace))
        .min()
        .map(|start| if start > window_start { start } else { window_start });

    let mut effective_end = window_end;
    if let Some(start) = damage_start
        && start < window_end
    {
        let damage_secs = elapsed_secs(start, window_end);
        let loss = vital_math::points_over(config.decay.health_neglect_per_hour, damage_secs);
        let health_before = pet.vitals.health;
        pet.vitals.health = vital_math::sub(health_before, loss);
        // Death freezes the rest of the window for every vital.
        if pet.vitals.health == Decimal::ZERO
            && let Some(to_death) =
                vital_math::secs_to_deplete(health_before, config.decay.health_neglect_per_hour, 100)
        {
            let death_at = add_secs(start, to_death.to_u64().unwrap_or(0));
            if death_at < effective_end {
                effective_end = death_at;
            }
        }
    }

    let effective_secs = elapsed_secs(window_start, effective_end);
    pet.vitals.hunger = vital_math::sub(
        pet.vitals.hunger,
        vital_math::points_over(config.decay.hunger_per_hour, effective_secs),
    );
    pet.vitals.happiness = vital_math::sub(
        pet.vitals.happiness,
        vital_math::points_over_pct(config.decay.happiness_per_hour, happiness_pct, effective_secs),
    );
    pet.vitals.energy = vital_math::sub(
        pet.vitals.energy,
        vital_math::points_over(config.decay.energy_per_hour, effective_secs),
    );
    pet.vitals.hygiene = vital_math::sub(
        pet.vitals.hygiene,
        vital_math::points_over(config.decay.hygiene_per_hour, effective_secs),
    );
}

/// Drop depletion stamps whose vital is no longer at zero.
///
/// Called by the decay pass and by anything that raises hunger or
/// happiness (feeding, item effects), so the neglect and depression clocks
/// stop the moment the vital recovers.
pub(crate) fn clear_stale_depletion_stamps(pet: &mut Pet) {
    if pet.vitals.hunger > Decimal::ZERO {
        pet.hunger_depleted_since = None;
    }
    if pet.vitals.happiness > Decimal::ZERO {
        pet.happiness_depleted_since = None;
    }
}

/// The personality-adjusted happiness decay modifier, percent.
const fn happiness_decay_pct(personality: Personality, config: &BalanceConfig) -> u32 {
    match personality {
        Personality::Playful => config.decay.playful_happiness_decay_pct,
        Personality::Lazy => config.decay.lazy_happiness_decay_pct,
        _ => 100,
    }
}

/// The instant a vital reaches zero within the window, if it does.
///
/// A vital already at zero "reaches" it at the window start.
fn depletion_instant(
    window_start: DateTime<Utc>,
    value: Decimal,
    rate_per_hour: u32,
    pct: u32,
    window_secs: u64,
) -> Option<DateTime<Utc>> {
    if value <= Decimal::ZERO {
        return Some(window_start);
    }
    let to_zero = vital_math::secs_to_deplete(value, rate_per_hour, pct)?;
    let to_zero_secs = to_zero.to_u64()?;
    if to_zero_secs <= window_secs {
        Some(add_secs(window_start, to_zero_secs))
    } else {
        None
    }
}

/// Add whole seconds to an instant, saturating instead of overflowing.
fn add_secs(instant: DateTime<Utc>, secs: u64) -> DateTime<Utc> {
    TimeDelta::try_seconds(i64::try_from(secs).unwrap_or(i64::MAX))
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
