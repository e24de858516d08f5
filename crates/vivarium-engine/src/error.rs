//! The engine's unified error type and its stable codes.
//!
//! Every failure mode a caller can see maps to one stable `snake_case`
//! code via [`EngineError::code`]. The presentation layer translates codes
//! to localized text; messages here are for operators, and no internal
//! state crosses the boundary.

use vivarium_pets::PetError;
use vivarium_store::StoreError;
use vivarium_types::PetId;

/// Errors surfaced by the pet lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A care-logic refusal (invalid state, insufficient energy, unknown
    /// tags, ...).
    #[error(transparent)]
    Care(#[from] PetError),

    /// No pet exists under this ID for this owner.
    #[error("pet not found: {0}")]
    NotFound(PetId),

    /// The storage collaborator failed; retryable by the caller.
    #[error("storage unavailable: {reason}")]
    StorageUnavailable {
        /// Short operator-facing description of the failure.
        reason: String,
    },

    /// The owner already holds the maximum number of pets.
    #[error("pet limit reached: an owner may hold at most {limit} pets")]
    PetLimitReached {
        /// The configured cap.
        limit: u32,
    },
}

impl From<StoreError> for EngineError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable { reason } => Self::StorageUnavailable { reason },
        }
    }
}

impl EngineError {
    /// The stable code the presentation layer keys its translations on.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Care(PetError::InvalidState { .. }) => "invalid_state",
            Self::Care(PetError::InsufficientEnergy { .. }) => "insufficient_energy",
            Self::Care(PetError::NotSleeping) => "not_sleeping",
            Self::Care(PetError::UnknownSpecies(_)) => "unknown_species",
            Self::Care(PetError::UnknownPersonality(_)) => "unknown_personality",
            Self::NotFound(_) => "not_found",
            Self::StorageUnavailable { .. } => "storage_unavailable",
            Self::PetLimitReached { .. } => "pet_limit_reached",
        }
    }

    /// Whether the caller may retry the same request unchanged.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use vivarium_types::PetStatus;

    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            EngineError::Care(PetError::InvalidState {
                status: PetStatus::Dead
            })
            .code(),
            "invalid_state"
        );
        assert_eq!(EngineError::NotFound(PetId::new()).code(), "not_found");
        assert_eq!(
            EngineError::StorageUnavailable {
                reason: String::from("down")
            }
            .code(),
            "storage_unavailable"
        );
        assert_eq!(EngineError::PetLimitReached { limit: 10 }.code(), "pet_limit_reached");
    }

    #[test]
    fn only_storage_failures_are_retryable() {
        assert!(
            EngineError::StorageUnavailable {
                reason: String::from("down")
            }
            .is_retryable()
        );
        assert!(!EngineError::NotFound(PetId::new()).is_retryable());
        assert!(!EngineError::Care(PetError::NotSleeping).is_retryable());
    }

    #[test]
    fn store_not_found_maps_through() {
        let id = PetId::new();
        let err: EngineError = StoreError::NotFound(id).into();
        assert_eq!(err, EngineError::NotFound(id));
    }
}
