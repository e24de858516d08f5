//! Response shapes and boundary payloads.
//!
//! These are the types the presentation layer reads and the item catalog
//! writes. They carry whole-point vitals and derived projections only --
//! nothing in here is an authority over stored state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EvolutionStage, Personality, PetStatus, Rarity, Species};
use crate::ids::PetId;

/// Whole-point projection of a pet's vitals, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VitalsView {
    /// Satiety.
    pub hunger: u32,
    /// Mood.
    pub happiness: u32,
    /// Physical condition.
    pub health: u32,
    /// Stamina.
    pub energy: u32,
    /// Cleanliness.
    pub hygiene: u32,
}

/// Battle-relevant stats derived from species, level, rarity and
/// personality.
///
/// Recomputed on every read; battle systems consume this snapshot but the
/// engine never persists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BattleStats {
    /// Offensive power.
    pub attack: u32,
    /// Damage mitigation.
    pub defense: u32,
    /// Turn-order weight.
    pub speed: u32,
    /// Hit points pool.
    pub max_hp: u32,
}

/// Result of a resolved care action.
///
/// The vitals, status and level fields are all taken from the same atomic
/// update, so a caller can never observe a level-up without the vitals that
/// produced it (or vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionOutcome {
    /// Post-action vitals.
    pub vitals: VitalsView,
    /// Post-action status.
    pub status: PetStatus,
    /// Whether the action's experience grant crossed a level threshold.
    pub leveled_up: bool,
    /// The new level, present only when `leveled_up` is true.
    pub new_level: Option<u32>,
    /// When the pet will wake naturally, present only while sleeping.
    pub sleep_until: Option<chrono::DateTime<chrono::Utc>>,
}

/// Full passive read of a pet: vitals plus every derived projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetSnapshot {
    /// Pet identifier.
    pub id: PetId,
    /// Display name.
    pub name: String,
    /// Species tag.
    pub species: Species,
    /// Personality tag.
    pub personality: Personality,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Current level.
    pub level: u32,
    /// Experience toward the next level.
    pub experience: u64,
    /// Experience required to reach the next level.
    pub exp_to_next_level: u64,
    /// Progress through the current level as a percentage.
    #[ts(as = "String")]
    pub exp_progress_percent: Decimal,
    /// Current evolution stage.
    pub evolution_stage: EvolutionStage,
    /// Current vitals.
    pub vitals: VitalsView,
    /// Derived battle stats.
    pub battle_stats: BattleStats,
    /// Current status.
    pub status: PetStatus,
    /// Weighted average of the vitals (a single wellbeing score).
    pub overall_wellbeing: u32,
    /// Whether a battle system would accept this pet right now.
    pub can_battle: bool,
    /// Whole days since adoption.
    pub age_days: i64,
    /// When the pet will wake naturally, present only while sleeping.
    pub sleep_until: Option<chrono::DateTime<chrono::Utc>>,
}

/// A signed vital adjustment requested by an external collaborator.
///
/// The item catalog translates an inventory item (medicine, treats, soap)
/// into one of these; the engine clamps each component into the vital
/// range when applying it. Missing fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VitalDelta {
    /// Change to hunger, in points.
    #[serde(default)]
    pub hunger: i32,
    /// Change to happiness, in points.
    #[serde(default)]
    pub happiness: i32,
    /// Change to health, in points.
    #[serde(default)]
    pub health: i32,
    /// Change to energy, in points.
    #[serde(default)]
    pub energy: i32,
    /// Change to hygiene, in points.
    #[serde(default)]
    pub hygiene: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vital_delta_defaults_to_zero() {
        let delta: Result<VitalDelta, _> = serde_json::from_str("{\"health\": 20}");
        let delta = delta.unwrap_or_default();
        assert_eq!(delta.health, 20);
        assert_eq!(delta.hunger, 0);
        assert_eq!(delta.energy, 0);
    }
}
