//! Server-side building blocks: shared state, the system router, and health.

mod health;
pub mod router;
mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError};
