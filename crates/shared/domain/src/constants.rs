//! Shared string constants used across slices.

/// OpenAPI tag for system endpoints (health, docs).
pub const SYSTEM_TAG: &str = "system";
/// OpenAPI tag for the user-directory endpoints.
pub const USERS_TAG: &str = "users";

/// Email of the user the directory is seeded with at process start.
pub const BOOTSTRAP_ADMIN_EMAIL: &str = "admin@email.com";
