//! Convenience re-exports for server code.

pub use crate::config::{ConfigError, load_config};
pub use crate::security::digest::sha256_hex;
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use roster_domain::config::ApiConfig;
pub use roster_domain::registry::{FeatureSlice, InitializedSlice};
pub use roster_domain::user::{Role, User};
