//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config
//! loading, identity digests, and the shared API state.
//!
//! ## Identity digests
//! ```rust
//! # use roster_kernel::security::digest::sha256_hex;
//! let token = sha256_hex("admin@email.com");
//! assert_eq!(token.len(), 64);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use roster_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod security;
pub mod server;

pub use roster_domain as domain;
