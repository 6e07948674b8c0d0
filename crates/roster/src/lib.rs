//! Facade crate for Roster features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

pub use roster_domain as domain;
pub use roster_kernel as kernel;

use roster_domain::config::ApiConfig;

pub mod server {
    pub mod router {
        pub use roster_directory::directory_router;
        pub use roster_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use roster_directory as directory;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["directory"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
#[must_use]
pub fn init(config: &ApiConfig) -> Vec<domain::registry::InitializedSlice> {
    vec![
        // User directory
        features::directory::init(&config.directory),
    ]
}
