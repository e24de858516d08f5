//! Closed enumerations for the Vivarium pet engine.
//!
//! The action set and status set are closed -- they are exhaustive tagged
//! variants, never open strings. Boundary layers parse incoming tags against
//! these sets and reject anything unrecognized before a pet is touched.
//!
//! All wire representations are `snake_case` to match what the client
//! already speaks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The species of a pet, fixed at adoption.
///
/// Species selects the base battle-stat row; it never changes over the pet's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Species {
    /// Agile and quick to act.
    Cat,
    /// Sturdy and loyal.
    Dog,
    /// Fast but fragile.
    Rabbit,
    /// Balanced trickster.
    Fox,
    /// Slow, heavy hitter.
    Dragon,
    /// High-defense mythical.
    Unicorn,
    /// Glass cannon.
    Phoenix,
    /// Durable construct.
    Robot,
    /// Soft all-rounder.
    Slime,
}

impl Species {
    /// The canonical lowercase tag for this species.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Rabbit => "rabbit",
            Self::Fox => "fox",
            Self::Dragon => "dragon",
            Self::Unicorn => "unicorn",
            Self::Phoenix => "phoenix",
            Self::Robot => "robot",
            Self::Slime => "slime",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// The personality tag of a pet, fixed at adoption.
///
/// Personality shades both care behavior (decay and action modifiers) and
/// the derived battle stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Personality {
    /// Loves games; happiness fades faster when bored.
    Playful,
    /// Low-energy temperament; happiness fades slower.
    Lazy,
    /// Stronger attacker.
    Aggressive,
    /// Extra happiness from petting.
    Affectionate,
    /// Unpredictable.
    Mysterious,
    /// Stronger defender.
    Brave,
    /// Learns faster from play.
    Clever,
    /// Food-motivated.
    Greedy,
}

impl Personality {
    /// The canonical lowercase tag for this personality.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playful => "playful",
            Self::Lazy => "lazy",
            Self::Aggressive => "aggressive",
            Self::Affectionate => "affectionate",
            Self::Mysterious => "mysterious",
            Self::Brave => "brave",
            Self::Clever => "clever",
            Self::Greedy => "greedy",
        }
    }
}

impl core::fmt::Display for Personality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier assigned at adoption by the weighted generator.
///
/// Rarity applies a multiplicative bonus to base battle stats and scales
/// per-level stat growth. It never changes after adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Baseline tier (60% of draws).
    Common,
    /// Slightly boosted (25%).
    Uncommon,
    /// Noticeably boosted (10%).
    Rare,
    /// Strong bonus (4%).
    Epic,
    /// Top tier (1%).
    Legendary,
}

impl core::fmt::Display for Rarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        };
        write!(f, "{tag}")
    }
}

// ---------------------------------------------------------------------------
// Evolution stages
// ---------------------------------------------------------------------------

/// Coarse life-phase derived from level.
///
/// The stage is a monotone step function of level -- it never decreases,
/// and it is recomputed whenever the level changes rather than stored
/// authority of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EvolutionStage {
    /// Starting stage for every new pet.
    Baby,
    /// First evolution.
    Juvenile,
    /// Second evolution.
    Adult,
    /// Third evolution.
    Elder,
    /// Final evolution.
    Ascended,
}

impl core::fmt::Display for EvolutionStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            Self::Baby => "baby",
            Self::Juvenile => "juvenile",
            Self::Adult => "adult",
            Self::Elder => "elder",
            Self::Ascended => "ascended",
        };
        write!(f, "{tag}")
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// The categorical status of a pet.
///
/// Status is derived from vitals and explicit sleep/wake transitions; it is
/// never settable directly by callers. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum PetStatus {
    /// Awake and well enough to act.
    Active,
    /// Asleep until `sleep_until`; most actions are refused.
    Sleeping,
    /// Health has fallen below the sickness threshold.
    Sick,
    /// Happiness has been depleted for a sustained period.
    Depressed,
    /// Health reached zero. No transitions out.
    Dead,
}

impl core::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            Self::Active => "active",
            Self::Sleeping => "sleeping",
            Self::Sick => "sick",
            Self::Depressed => "depressed",
            Self::Dead => "dead",
        };
        write!(f, "{tag}")
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A discrete player-triggered care action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ActionKind {
    /// Raise hunger (satiety) and grant a small happiness bonus.
    Feed,
    /// Show affection; raises happiness.
    Pet,
    /// Play a game; raises happiness at an energy cost.
    Play,
    /// Put the pet to sleep for the configured duration.
    Sleep,
    /// Wake a sleeping pet early.
    Wake,
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            Self::Feed => "feed",
            Self::Pet => "pet",
            Self::Play => "play",
            Self::Sleep => "sleep",
            Self::Wake => "wake",
        };
        write!(f, "{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&PetStatus::Sleeping).ok();
        assert_eq!(json.as_deref(), Some("\"sleeping\""));
    }

    #[test]
    fn species_roundtrip() {
        let json = serde_json::to_string(&Species::Phoenix).ok();
        assert_eq!(json.as_deref(), Some("\"phoenix\""));
        let back: Result<Species, _> = serde_json::from_str("\"phoenix\"");
        assert_eq!(back.ok(), Some(Species::Phoenix));
    }

    #[test]
    fn display_matches_wire_tag() {
        assert_eq!(ActionKind::Feed.to_string(), "feed");
        assert_eq!(Rarity::Legendary.to_string(), "legendary");
        assert_eq!(EvolutionStage::Ascended.to_string(), "ascended");
        assert_eq!(Personality::Affectionate.to_string(), "affectionate");
    }
}
