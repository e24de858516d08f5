//! HTTP care API over the Vivarium pet lifecycle engine.
//!
//! A thin Axum layer: every route resolves the owner from the session
//! header, calls one engine operation, and serializes the result. All
//! simulation behavior lives below the engine seam; nothing here touches
//! a pet record directly.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
