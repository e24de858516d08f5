//! Error types for pet care operations.
//!
//! Every failure is detected before any mutation -- a returned error means
//! the pet record is untouched. Errors carry only what the caller needs to
//! explain the refusal; no internal state crosses the boundary.

use vivarium_types::PetStatus;

/// Errors that can occur while resolving care operations on a pet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    /// The requested action is not legal for the pet's current status
    /// (for example feeding a sleeping or dead pet).
    #[error("action not allowed while pet is {status}")]
    InvalidState {
        /// The status that blocked the action.
        status: PetStatus,
    },

    /// A vital precondition was not met (play requires energy).
    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy {
        /// Energy points the action costs.
        required: u32,
        /// Energy points the pet currently has.
        available: u32,
    },

    /// Wake was requested but the pet is not sleeping.
    #[error("pet is not sleeping")]
    NotSleeping,

    /// The species tag is not in the recognized set.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// The personality tag is not in the recognized set.
    #[error("unknown personality: {0}")]
    UnknownPersonality(String),
}
