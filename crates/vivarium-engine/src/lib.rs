//! The Vivarium pet lifecycle engine.
//!
//! Owns nothing but the pipeline: it loads pet records through the
//! [`vivarium_store::PetStore`] seam, runs the care logic from
//! `vivarium-pets` under a per-pet lock, and persists the result. Time
//! comes from an injectable [`Clock`], configuration from `vivarium.yaml`.
//!
//! # Modules
//!
//! - [`clock`] -- the time source seam ([`SystemClock`], [`ManualClock`])
//! - [`config`] -- YAML configuration loading ([`EngineConfig`])
//! - [`error`] -- the unified error type with stable codes ([`EngineError`])
//! - [`service`] -- the per-pet serialized pipeline ([`PetService`])

pub mod clock;
pub mod config;
pub mod error;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EngineConfig, ServerConfig};
pub use error::EngineError;
pub use service::PetService;
