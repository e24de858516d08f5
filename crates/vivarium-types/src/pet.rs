//! The [`Pet`] aggregate and its vital block.
//!
//! Vitals are held as [`Decimal`] so time-driven decay stays exact no matter
//! how often the record is normalized -- integer storage would silently
//! truncate sub-point decay under frequent polling. Every boundary surface
//! exposes vitals as whole points in `[0, 100]` via [`Vitals::view`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EvolutionStage, Personality, PetStatus, Rarity, Species};
use crate::ids::{OwnerId, PetId};
use crate::views::VitalsView;

/// The five care vitals of a pet.
///
/// Each value is kept within `[0, 100]`. Mutation goes through the care
/// logic crate; this struct only knows how to clamp and project itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vitals {
    /// Satiety. 0 means starving.
    #[ts(as = "String")]
    pub hunger: Decimal,
    /// Mood. 0 means utterly miserable.
    #[ts(as = "String")]
    pub happiness: Decimal,
    /// Physical condition. 0 means dead.
    #[ts(as = "String")]
    pub health: Decimal,
    /// Stamina available for play.
    #[ts(as = "String")]
    pub energy: Decimal,
    /// Cleanliness.
    #[ts(as = "String")]
    pub hygiene: Decimal,
}

impl Vitals {
    /// Clamp a raw decimal into the valid vital range `[0, 100]`.
    pub fn clamped(value: Decimal) -> Decimal {
        value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Build a vital block from whole points, clamping each component.
    pub fn from_points(hunger: u32, happiness: u32, health: u32, energy: u32, hygiene: u32) -> Self {
        Self {
            hunger: Self::clamped(Decimal::from(hunger)),
            happiness: Self::clamped(Decimal::from(happiness)),
            health: Self::clamped(Decimal::from(health)),
            energy: Self::clamped(Decimal::from(energy)),
            hygiene: Self::clamped(Decimal::from(hygiene)),
        }
    }

    /// Project the vitals to whole points for the client.
    ///
    /// Values are truncated toward zero; the invariant `[0, 100]` means the
    /// conversion cannot fail, so a failed conversion collapses to 0.
    pub fn view(&self) -> VitalsView {
        VitalsView {
            hunger: to_points(self.hunger),
            happiness: to_points(self.happiness),
            health: to_points(self.health),
            energy: to_points(self.energy),
            hygiene: to_points(self.hygiene),
        }
    }
}

/// Truncate a clamped vital to whole points.
fn to_points(value: Decimal) -> u32 {
    Vitals::clamped(value).trunc().to_u32().unwrap_or(0)
}

/// A virtual pet: the aggregate root owned by the lifecycle engine.
///
/// Identity fields (`id`, `owner_id`, `species`, `personality`, `rarity`,
/// `created_at`) are immutable after adoption. Vitals, progression and
/// status mutate only through the serialized update pipeline. Battle stats
/// and experience progress are *never* stored -- they are recomputed from
/// these fields on read so they cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Pet {
    /// Unique pet identifier.
    pub id: PetId,
    /// The owning player.
    pub owner_id: OwnerId,
    /// Display name chosen at adoption.
    pub name: String,
    /// Species, fixed at adoption.
    pub species: Species,
    /// Personality tag, fixed at adoption.
    pub personality: Personality,
    /// Rarity tier rolled at adoption.
    pub rarity: Rarity,
    /// Current level (>= 1, never capped).
    pub level: u32,
    /// Experience accumulated toward the next level.
    ///
    /// Always strictly below the threshold for the current level once an
    /// update completes; rollover happens atomically with the level-up.
    pub experience: u64,
    /// Life-phase derived from level; monotone non-decreasing.
    pub evolution_stage: EvolutionStage,
    /// Categorical status derived from vitals and sleep state.
    pub status: PetStatus,
    /// The care vitals.
    pub vitals: Vitals,
    /// Present iff the pet is sleeping; the instant it wakes naturally.
    pub sleep_until: Option<DateTime<Utc>>,
    /// The instant hunger bottomed out, if it is currently at zero.
    ///
    /// Together with `happiness_depleted_since` this is the neglect
    /// accumulator: health only decays once a vital has been depleted for
    /// longer than the configured grace period, and the grace must not
    /// reset between normalizations. Cleared as soon as hunger rises.
    pub hunger_depleted_since: Option<DateTime<Utc>>,
    /// The instant happiness bottomed out, if it is currently at zero.
    ///
    /// Doubles as the depression counter: sustained depletion past the
    /// configured duration flips the status to depressed. Cleared as soon
    /// as happiness rises above zero.
    pub happiness_depleted_since: Option<DateTime<Utc>>,
    /// Adoption time.
    pub created_at: DateTime<Utc>,
    /// The decay anchor: the last instant the record was normalized.
    pub last_updated_at: DateTime<Utc>,
}

impl Pet {
    /// Whether the pet is still alive (death is terminal).
    pub fn is_alive(&self) -> bool {
        self.status != PetStatus::Dead
    }
}
