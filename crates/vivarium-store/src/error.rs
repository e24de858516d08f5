//! Error types for the storage seam.

use vivarium_types::PetId;

/// Errors a pet store can surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the given pet ID.
    #[error("pet not found: {0}")]
    NotFound(PetId),

    /// The backing store could not be reached or answered abnormally.
    ///
    /// Retryable by the caller; the engine never retries internally and
    /// never commits partial state when this surfaces.
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Short operator-facing description of the failure.
        reason: String,
    },
}
