//! Balance configuration: every product-tunable constant of the care loop.
//!
//! The engine loads these from the `balance` section of `vivarium.yaml`;
//! every field has a serde default so a partial file (or none at all) yields
//! a playable baseline. Rates are whole points per hour of wall-clock time;
//! percent modifiers are expressed as integers (120 means 1.2x) so all math
//! stays exact.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Decay
// ---------------------------------------------------------------------------

/// Time-driven vital decay rates and the neglect rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecayConfig {
    /// Hunger points lost per hour while awake (default: 5).
    #[serde(default = "default_hunger_per_hour")]
    pub hunger_per_hour: u32,

    /// Happiness points lost per hour while awake (default: 3).
    #[serde(default = "default_happiness_per_hour")]
    pub happiness_per_hour: u32,

    /// Energy points lost per hour while awake (default: 2).
    #[serde(default = "default_energy_per_hour")]
    pub energy_per_hour: u32,

    /// Hygiene points lost per hour while awake (default: 2).
    #[serde(default = "default_hygiene_per_hour")]
    pub hygiene_per_hour: u32,

    /// Health points lost per hour of unresolved neglect (default: 5).
    ///
    /// Neglect means hunger or happiness sitting at zero beyond the grace
    /// period. Health never decays on its own otherwise.
    #[serde(default = "default_health_neglect_per_hour")]
    pub health_neglect_per_hour: u32,

    /// Seconds a vital may sit at zero before neglect damage starts
    /// (default: 3600).
    #[serde(default = "default_neglect_grace_secs")]
    pub neglect_grace_secs: u64,

    /// Energy points recovered per hour while sleeping (default: 20).
    #[serde(default = "default_sleep_energy_regen_per_hour")]
    pub sleep_energy_regen_per_hour: u32,

    /// Happiness decay modifier for playful pets, percent (default: 120).
    #[serde(default = "default_playful_happiness_decay_pct")]
    pub playful_happiness_decay_pct: u32,

    /// Happiness decay modifier for lazy pets, percent (default: 80).
    #[serde(default = "default_lazy_happiness_decay_pct")]
    pub lazy_happiness_decay_pct: u32,
}

const fn default_hunger_per_hour() -> u32 {
    5
}
const fn default_happiness_per_hour() -> u32 {
    3
}
const fn default_energy_per_hour() -> u32 {
    2
}
const fn default_hygiene_per_hour() -> u32 {
    2
}
const fn default_health_neglect_per_hour() -> u32 {
    5
}
const fn default_neglect_grace_secs() -> u64 {
    3600
}
const fn default_sleep_energy_regen_per_hour() -> u32 {
    20
}
const fn default_playful_happiness_decay_pct() -> u32 {
    120
}
const fn default_lazy_happiness_decay_pct() -> u32 {
    80
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_per_hour: default_hunger_per_hour(),
            happiness_per_hour: default_happiness_per_hour(),
            energy_per_hour: default_energy_per_hour(),
            hygiene_per_hour: default_hygiene_per_hour(),
            health_neglect_per_hour: default_health_neglect_per_hour(),
            neglect_grace_secs: default_neglect_grace_secs(),
            sleep_energy_regen_per_hour: default_sleep_energy_regen_per_hour(),
            playful_happiness_decay_pct: default_playful_happiness_decay_pct(),
            lazy_happiness_decay_pct: default_lazy_happiness_decay_pct(),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Effect sizes and costs of the five care actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionConfig {
    /// Hunger points restored by one feeding (default: 25).
    #[serde(default = "default_feed_hunger")]
    pub feed_hunger: u32,

    /// Happiness bonus granted alongside a feeding (default: 5).
    #[serde(default = "default_feed_happiness_bonus")]
    pub feed_happiness_bonus: u32,

    /// Experience granted by a feeding (default: 5).
    #[serde(default = "default_feed_xp")]
    pub feed_xp: u64,

    /// Happiness points granted by petting (default: 2).
    #[serde(default = "default_pet_happiness")]
    pub pet_happiness: u32,

    /// Extra petting happiness for affectionate pets (default: 1).
    #[serde(default = "default_affectionate_pet_bonus")]
    pub affectionate_pet_bonus: u32,

    /// Happiness points granted by playing (default: 20).
    #[serde(default = "default_play_happiness")]
    pub play_happiness: u32,

    /// Energy points a play session costs (default: 15).
    #[serde(default = "default_play_energy_cost")]
    pub play_energy_cost: u32,

    /// Experience granted by a play session (default: 10).
    #[serde(default = "default_play_xp")]
    pub play_xp: u64,

    /// Play experience modifier for clever pets, percent (default: 120).
    #[serde(default = "default_clever_play_xp_pct")]
    pub clever_play_xp_pct: u32,

    /// How long a sleep lasts, in seconds (default: 4 hours).
    #[serde(default = "default_sleep_duration_secs")]
    pub sleep_duration_secs: u64,

    /// Energy bonus for completing a full sleep (default: 30).
    ///
    /// An early wake grants the bonus scaled by the fraction of the sleep
    /// actually slept.
    #[serde(default = "default_wake_energy_bonus")]
    pub wake_energy_bonus: u32,
}

const fn default_feed_hunger() -> u32 {
    25
}
const fn default_feed_happiness_bonus() -> u32 {
    5
}
const fn default_feed_xp() -> u64 {
    5
}
const fn default_pet_happiness() -> u32 {
    2
}
const fn default_affectionate_pet_bonus() -> u32 {
    1
}
const fn default_play_happiness() -> u32 {
    20
}
const fn default_play_energy_cost() -> u32 {
    15
}
const fn default_play_xp() -> u64 {
    10
}
const fn default_clever_play_xp_pct() -> u32 {
    120
}
const fn default_sleep_duration_secs() -> u64 {
    4 * 3600
}
const fn default_wake_energy_bonus() -> u32 {
    30
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            feed_hunger: default_feed_hunger(),
            feed_happiness_bonus: default_feed_happiness_bonus(),
            feed_xp: default_feed_xp(),
            pet_happiness: default_pet_happiness(),
            affectionate_pet_bonus: default_affectionate_pet_bonus(),
            play_happiness: default_play_happiness(),
            play_energy_cost: default_play_energy_cost(),
            play_xp: default_play_xp(),
            clever_play_xp_pct: default_clever_play_xp_pct(),
            sleep_duration_secs: default_sleep_duration_secs(),
            wake_energy_bonus: default_wake_energy_bonus(),
        }
    }
}

// ---------------------------------------------------------------------------
// Progression
// ---------------------------------------------------------------------------

/// Experience curve and evolution thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressionConfig {
    /// Base of the experience curve (default: 100).
    ///
    /// Level `n` requires `floor(base * n^1.5)` experience; the exponent is
    /// fixed so the curve stays integer-exact and replayable.
    #[serde(default = "default_xp_base")]
    pub xp_base: u64,

    /// Level at which a pet becomes a juvenile (default: 10).
    #[serde(default = "default_juvenile_level")]
    pub juvenile_level: u32,

    /// Level at which a pet becomes an adult (default: 25).
    #[serde(default = "default_adult_level")]
    pub adult_level: u32,

    /// Level at which a pet becomes an elder (default: 50).
    #[serde(default = "default_elder_level")]
    pub elder_level: u32,

    /// Level at which a pet ascends (default: 75).
    #[serde(default = "default_ascended_level")]
    pub ascended_level: u32,
}

const fn default_xp_base() -> u64 {
    100
}
const fn default_juvenile_level() -> u32 {
    10
}
const fn default_adult_level() -> u32 {
    25
}
const fn default_elder_level() -> u32 {
    50
}
const fn default_ascended_level() -> u32 {
    75
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_base: default_xp_base(),
            juvenile_level: default_juvenile_level(),
            adult_level: default_adult_level(),
            elder_level: default_elder_level(),
            ascended_level: default_ascended_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Status thresholds
// ---------------------------------------------------------------------------

/// Thresholds driving the sick and depressed transitions.
///
/// Enter and exit thresholds differ on purpose (hysteresis): a pet hovering
/// around a boundary must not flap between states.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusConfig {
    /// A pet falls sick when health drops below this (default: 30).
    #[serde(default = "default_sick_enter_below")]
    pub sick_enter_below: u32,

    /// A sick pet recovers when health rises above this (default: 50).
    #[serde(default = "default_sick_exit_above")]
    pub sick_exit_above: u32,

    /// Seconds of zero happiness before depression sets in (default: 6h).
    #[serde(default = "default_depressed_after_secs")]
    pub depressed_after_secs: u64,

    /// A depressed pet recovers when happiness rises above this
    /// (default: 30).
    #[serde(default = "default_depressed_exit_above")]
    pub depressed_exit_above: u32,
}

const fn default_sick_enter_below() -> u32 {
    30
}
const fn default_sick_exit_above() -> u32 {
    50
}
const fn default_depressed_after_secs() -> u64 {
    6 * 3600
}
const fn default_depressed_exit_above() -> u32 {
    30
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            sick_enter_below: default_sick_enter_below(),
            sick_exit_above: default_sick_exit_above(),
            depressed_after_secs: default_depressed_after_secs(),
            depressed_exit_above: default_depressed_exit_above(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Per-tier values used by the rarity generator and battle-stat derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RarityTier {
    /// Draw weight (relative, summed across tiers).
    pub weight: u32,
    /// Multiplicative bonus on base battle stats, percent.
    pub multiplier_pct: u32,
    /// Battle-stat points gained per level.
    pub growth_per_level: u32,
}

/// The published rarity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RarityConfig {
    /// Common tier (default weight 60, 100%, +1/level).
    #[serde(default = "default_common_tier")]
    pub common: RarityTier,
    /// Uncommon tier (default weight 25, 110%, +1/level).
    #[serde(default = "default_uncommon_tier")]
    pub uncommon: RarityTier,
    /// Rare tier (default weight 10, 120%, +2/level).
    #[serde(default = "default_rare_tier")]
    pub rare: RarityTier,
    /// Epic tier (default weight 4, 130%, +2/level).
    #[serde(default = "default_epic_tier")]
    pub epic: RarityTier,
    /// Legendary tier (default weight 1, 150%, +3/level).
    #[serde(default = "default_legendary_tier")]
    pub legendary: RarityTier,
}

const fn default_common_tier() -> RarityTier {
    RarityTier {
        weight: 60,
        multiplier_pct: 100,
        growth_per_level: 1,
    }
}
const fn default_uncommon_tier() -> RarityTier {
    RarityTier {
        weight: 25,
        multiplier_pct: 110,
        growth_per_level: 1,
    }
}
const fn default_rare_tier() -> RarityTier {
    RarityTier {
        weight: 10,
        multiplier_pct: 120,
        growth_per_level: 2,
    }
}
const fn default_epic_tier() -> RarityTier {
    RarityTier {
        weight: 4,
        multiplier_pct: 130,
        growth_per_level: 2,
    }
}
const fn default_legendary_tier() -> RarityTier {
    RarityTier {
        weight: 1,
        multiplier_pct: 150,
        growth_per_level: 3,
    }
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            common: default_common_tier(),
            uncommon: default_uncommon_tier(),
            rare: default_rare_tier(),
            epic: default_epic_tier(),
            legendary: default_legendary_tier(),
        }
    }
}

impl RarityConfig {
    /// The tier row for a given rarity.
    pub const fn tier(&self, rarity: vivarium_types::Rarity) -> RarityTier {
        match rarity {
            vivarium_types::Rarity::Common => self.common,
            vivarium_types::Rarity::Uncommon => self.uncommon,
            vivarium_types::Rarity::Rare => self.rare,
            vivarium_types::Rarity::Epic => self.epic,
            vivarium_types::Rarity::Legendary => self.legendary,
        }
    }
}

// ---------------------------------------------------------------------------
// Spawn
// ---------------------------------------------------------------------------

/// Starting vitals for a freshly adopted pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpawnConfig {
    /// Starting hunger (default: 70).
    #[serde(default = "default_starting_hunger")]
    pub hunger: u32,
    /// Starting happiness (default: 70).
    #[serde(default = "default_starting_happiness")]
    pub happiness: u32,
    /// Starting health (default: 100).
    #[serde(default = "default_starting_health")]
    pub health: u32,
    /// Starting energy (default: 100).
    #[serde(default = "default_starting_energy")]
    pub energy: u32,
    /// Starting hygiene (default: 100).
    #[serde(default = "default_starting_hygiene")]
    pub hygiene: u32,
}

const fn default_starting_hunger() -> u32 {
    70
}
const fn default_starting_happiness() -> u32 {
    70
}
const fn default_starting_health() -> u32 {
    100
}
const fn default_starting_energy() -> u32 {
    100
}
const fn default_starting_hygiene() -> u32 {
    100
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            hunger: default_starting_hunger(),
            happiness: default_starting_happiness(),
            health: default_starting_health(),
            energy: default_starting_energy(),
            hygiene: default_starting_hygiene(),
        }
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Per-owner caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Maximum pets one owner may hold, dead ones included (default: 10).
    #[serde(default = "default_max_pets_per_owner")]
    pub max_pets_per_owner: u32,
}

const fn default_max_pets_per_owner() -> u32 {
    10
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pets_per_owner: default_max_pets_per_owner(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level balance bundle
// ---------------------------------------------------------------------------

/// The complete balance configuration consumed by the care logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BalanceConfig {
    /// Decay rates and the neglect rule.
    #[serde(default)]
    pub decay: DecayConfig,
    /// Action effect sizes.
    #[serde(default)]
    pub actions: ActionConfig,
    /// Experience curve and evolution levels.
    #[serde(default)]
    pub progression: ProgressionConfig,
    /// Sick/depressed thresholds.
    #[serde(default)]
    pub status: StatusConfig,
    /// Rarity weights and bonuses.
    #[serde(default)]
    pub rarity: RarityConfig,
    /// Starting vitals.
    #[serde(default)]
    pub spawn: SpawnConfig,
    /// Per-owner caps.
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_values() {
        let cfg = BalanceConfig::default();
        assert_eq!(cfg.decay.hunger_per_hour, 5);
        assert_eq!(cfg.decay.happiness_per_hour, 3);
        assert_eq!(cfg.decay.sleep_energy_regen_per_hour, 20);
        assert_eq!(cfg.actions.feed_hunger, 25);
        assert_eq!(cfg.actions.play_energy_cost, 15);
        assert_eq!(cfg.actions.sleep_duration_secs, 14_400);
        assert_eq!(cfg.progression.xp_base, 100);
        assert_eq!(cfg.status.sick_enter_below, 30);
        assert_eq!(cfg.rarity.legendary.weight, 1);
        assert_eq!(cfg.spawn.hunger, 70);
        assert_eq!(cfg.limits.max_pets_per_owner, 10);
    }

    #[test]
    fn rarity_weights_sum_to_one_hundred() {
        let cfg = RarityConfig::default();
        let total = cfg
            .common
            .weight
            .saturating_add(cfg.uncommon.weight)
            .saturating_add(cfg.rare.weight)
            .saturating_add(cfg.epic.weight)
            .saturating_add(cfg.legendary.weight);
        assert_eq!(total, 100);
    }
}
