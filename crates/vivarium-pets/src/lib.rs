//! Pet care logic for the Vivarium engine.
//!
//! This crate is the logic layer -- everything that operates on a pet
//! record without touching I/O. It sits between `vivarium-types` (which
//! defines the data structures) and the engine/API crates (which handle
//! locking, persistence and transport).
//!
//! # Modules
//!
//! - [`actions`] -- care action validation and application ([`resolve`](actions::resolve))
//! - [`battle`] -- derived battle stats (pure projection)
//! - [`config`] -- every product-tunable balance constant ([`BalanceConfig`])
//! - [`decay`] -- the wall-clock stat decay clock ([`normalize`](decay::normalize))
//! - [`error`] -- error types for all care operations ([`PetError`])
//! - [`factory`] -- tag parsing, rarity draw, and adoption ([`create_pet`](factory::create_pet))
//! - [`progression`] -- experience thresholds, level-ups, evolution
//! - [`projection`] -- the read-side snapshot and wellbeing scores
//! - [`status`] -- the status state machine ([`evaluate`](status::evaluate))

pub mod actions;
pub mod battle;
pub mod config;
pub mod decay;
pub mod error;
pub mod factory;
pub mod progression;
pub mod projection;
pub mod status;

mod vital_math;

// Re-export primary types at crate root for convenience.
pub use actions::ActionEffects;
pub use config::BalanceConfig;
pub use decay::DecayOutcome;
pub use error::PetError;
pub use progression::LevelUp;
