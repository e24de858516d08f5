//! Derived battle stats.
//!
//! Battle stats are a pure projection of (species, level, rarity,
//! personality) -- they are recomputed on every read and never persisted,
//! so they cannot drift from their inputs. Battle *resolution* lives
//! elsewhere; this module only produces the snapshot a battle system reads.

use vivarium_types::{BattleStats, Personality, Pet, Species};

use crate::config::RarityConfig;

/// Base stat row for a species at level 1, before any bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesBase {
    /// Base attack.
    pub attack: u32,
    /// Base defense.
    pub defense: u32,
    /// Base speed.
    pub speed: u32,
    /// Base hit points.
    pub max_hp: u32,
}

/// The static per-species base table.
pub const fn species_base(species: Species) -> SpeciesBase {
    match species {
        Species::Cat => SpeciesBase {
            attack: 11,
            defense: 9,
            speed: 14,
            max_hp: 95,
        },
        Species::Dog => SpeciesBase {
            attack: 10,
            defense: 12,
            speed: 11,
            max_hp: 105,
        },
        Species::Rabbit => SpeciesBase {
            attack: 8,
            defense: 8,
            speed: 16,
            max_hp: 90,
        },
        Species::Fox => SpeciesBase {
            attack: 12,
            defense: 10,
            speed: 13,
            max_hp: 95,
        },
        Species::Dragon => SpeciesBase {
            attack: 15,
            defense: 13,
            speed: 8,
            max_hp: 120,
        },
        Species::Unicorn => SpeciesBase {
            attack: 10,
            defense: 14,
            speed: 12,
            max_hp: 110,
        },
        Species::Phoenix => SpeciesBase {
            attack: 14,
            defense: 8,
            speed: 12,
            max_hp: 90,
        },
        Species::Robot => SpeciesBase {
            attack: 11,
            defense: 15,
            speed: 9,
            max_hp: 115,
        },
        Species::Slime => SpeciesBase {
            attack: 9,
            defense: 11,
            speed: 10,
            max_hp: 130,
        },
    }
}

/// Compute the battle stats a battle system would read for this pet.
///
/// Formula per stat: `(base + growth * (level - 1)) * rarity_pct / 100`,
/// then the personality modifier. Hit points grow at twice the per-level
/// rate of the other stats.
pub fn derive(pet: &Pet, rarity: &RarityConfig) -> BattleStats {
    let base = species_base(pet.species);
    let tier = rarity.tier(pet.rarity);
    let levels = u64::from(pet.level.saturating_sub(1));
    let growth = u64::from(tier.growth_per_level).saturating_mul(levels);
    let hp_growth = growth.saturating_mul(2);

    let attack = scaled(u64::from(base.attack).saturating_add(growth), tier.multiplier_pct);
    let defense = scaled(u64::from(base.defense).saturating_add(growth), tier.multiplier_pct);
    let speed = scaled(u64::from(base.speed).saturating_add(growth), tier.multiplier_pct);
    let max_hp = scaled(
        u64::from(base.max_hp).saturating_add(hp_growth),
        tier.multiplier_pct,
    );

    // Personality shades exactly one stat.
    let (attack, defense, speed) = match pet.personality {
        Personality::Aggressive => (pct(attack, 110), defense, speed),
        Personality::Brave => (attack, pct(defense, 110), speed),
        Personality::Playful => (attack, defense, pct(speed, 110)),
        _ => (attack, defense, speed),
    };

    BattleStats {
        attack: clamp_u32(attack),
        defense: clamp_u32(defense),
        speed: clamp_u32(speed),
        max_hp: clamp_u32(max_hp),
    }
}

/// Apply an integer percent multiplier.
fn pct(value: u64, percent: u64) -> u64 {
    value
        .checked_mul(percent)
        .map_or(u64::MAX, |v| v.checked_div(100).unwrap_or(0))
}

/// Apply the rarity multiplier (percent).
fn scaled(value: u64, multiplier_pct: u32) -> u64 {
    pct(value, u64::from(multiplier_pct))
}

/// Narrow to `u32`, saturating.
fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
