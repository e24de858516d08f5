//! Experience, level-ups, and evolution stages.
//!
//! The curve is pure integer arithmetic so the same inputs always produce
//! the same levels -- there is no hidden state and no floating point.
//!
//! # Level-up formula
//!
//! Advancing from level `n` requires `floor(base * n^1.5)` experience,
//! computed exactly as `isqrt(base^2 * n^3)`. With the default base of 100:
//! level 1 -> 100 XP, level 2 -> 282, level 3 -> 519, level 5 -> 1118.
//!
//! Experience rolls over atomically with the level-up, so at rest a pet's
//! experience is always strictly below its current threshold. One large
//! grant can cross several thresholds at once.

use rust_decimal::Decimal;
use tracing::info;
use vivarium_types::{EvolutionStage, Pet};

use crate::config::ProgressionConfig;

/// Result of folding an experience grant into a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Whether at least one threshold was crossed.
    pub leveled_up: bool,
    /// The level after the grant, present only when `leveled_up` is true.
    pub new_level: Option<u32>,
}

impl LevelUp {
    /// The no-op result (no thresholds crossed).
    pub const NONE: Self = Self {
        leveled_up: false,
        new_level: None,
    };
}

/// Experience required to advance from `level` to `level + 1`.
///
/// Saturates at `u64::MAX` for astronomically high levels, which in
/// practice means progression simply stops advancing there.
pub fn xp_threshold(base: u64, level: u32) -> u64 {
    let cubed = u64::from(level).checked_pow(3).unwrap_or(u64::MAX);
    base.checked_mul(base)
        .and_then(|b| b.checked_mul(cubed))
        .map_or(u64::MAX, u64::isqrt)
}

/// The evolution stage a given level maps to.
pub const fn stage_for_level(level: u32, config: &ProgressionConfig) -> EvolutionStage {
    if level >= config.ascended_level {
        EvolutionStage::Ascended
    } else if level >= config.elder_level {
        EvolutionStage::Elder
    } else if level >= config.adult_level {
        EvolutionStage::Adult
    } else if level >= config.juvenile_level {
        EvolutionStage::Juvenile
    } else {
        EvolutionStage::Baby
    }
}

/// Fold an experience grant into the pet, applying any level-ups and the
/// resulting evolution-stage change atomically.
pub fn apply_xp(pet: &mut Pet, xp: u64, config: &ProgressionConfig) -> LevelUp {
    if xp == 0 {
        return LevelUp::NONE;
    }

    pet.experience = pet.experience.saturating_add(xp);
    let mut leveled = false;

    loop {
        let threshold = xp_threshold(config.xp_base, pet.level);
        if threshold == 0 || pet.experience < threshold {
            break;
        }
        pet.experience = pet.experience.checked_sub(threshold).unwrap_or(0);
        pet.level = pet.level.saturating_add(1);
        leveled = true;
    }

    if !leveled {
        return LevelUp::NONE;
    }

    let stage = stage_for_level(pet.level, config);
    // Evolution never regresses, even if thresholds were re-tuned downward.
    if stage > pet.evolution_stage {
        info!(pet_id = %pet.id, level = pet.level, stage = %stage, "pet evolved");
        pet.evolution_stage = stage;
    }
    info!(pet_id = %pet.id, level = pet.level, "level up");

    LevelUp {
        leveled_up: true,
        new_level: Some(pet.level),
    }
}

/// Progress through the current level as a percentage, recomputed on read.
pub fn exp_progress_percent(experience: u64, level: u32, config: &ProgressionConfig) -> Decimal {
    let threshold = xp_threshold(config.xp_base, level);
    if threshold == 0 {
        return Decimal::ONE_HUNDRED;
    }
    Decimal::from(experience)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|p| p.checked_div(Decimal::from(threshold)))
        .map_or(Decimal::ZERO, |p| {
            p.round_dp(1).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        })
}
