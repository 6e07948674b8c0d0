//! User-directory feature slice: concurrent in-memory user store, identity
//! digest lookup, and role-based access control for the mutating routes.

pub mod access;
pub mod error;
mod server;
pub mod store;

pub use crate::error::{AccessError, DirectoryError};
pub use crate::server::directory_router;
pub use crate::store::{MemoryStore, UserStore};

use roster_domain::config::DirectoryConfig;
use roster_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Directory feature state: the store behind its capability trait.
#[derive(Debug)]
pub struct Directory {
    store: Arc<dyn UserStore>,
}

impl Directory {
    #[must_use]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}

impl roster_kernel::domain::registry::FeatureSlice for Directory {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the directory feature.
///
/// Seeds the in-memory store with the configured bootstrap admin. The store
/// lives for the process lifetime; nothing survives a restart.
#[must_use]
pub fn init(config: &DirectoryConfig) -> InitializedSlice {
    tracing::info!(admin = %config.admin_email, "Directory slice initialized");

    let store = MemoryStore::new(config.admin_email.clone());

    InitializedSlice::new(Directory { store: Arc::new(store) })
}
