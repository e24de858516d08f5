//! Shared type definitions for the Vivarium pet engine.
//!
//! This crate holds the data structures every other crate agrees on:
//! strongly-typed identifiers, the closed enumerations (species, personality,
//! rarity, status, action kinds), the [`Pet`] aggregate itself, and the
//! response shapes the client reads. It contains no behavior beyond small
//! derived accessors -- all simulation logic lives in `vivarium-pets`.
//!
//! Types the TypeScript client consumes carry `ts-rs` export attributes so
//! bindings are generated alongside the Rust definitions.

pub mod enums;
pub mod ids;
pub mod pet;
pub mod views;

pub use enums::{ActionKind, EvolutionStage, Personality, PetStatus, Rarity, Species};
pub use ids::{OwnerId, PetId};
pub use pet::{Pet, Vitals};
pub use views::{ActionOutcome, BattleStats, PetSnapshot, VitalDelta, VitalsView};
