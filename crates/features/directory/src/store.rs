//! The user store: exclusive owner of the email → role mapping.
//!
//! All access goes through a [`UserStore`] so that alternative backings (for
//! example a persistent one) can satisfy the same contract. The in-memory
//! implementation guards the whole map with a single `RwLock`: reads may run
//! concurrently, writes serialize against everything, and every
//! check-then-act sequence holds the write lock across both steps.

use crate::error::DirectoryError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use roster_domain::user::{Role, User};
use roster_kernel::security::digest::sha256_hex;
use std::sync::Arc;

/// Capability contract for a user store.
///
/// Operations are synchronous and run to completion once the lock is held;
/// failures are values, never panics, and the store performs no logging or
/// retries of its own.
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Returns a snapshot of all users. No ordering guarantee.
    fn list(&self) -> Vec<User>;

    /// Inserts a new user.
    ///
    /// # Errors
    /// * [`DirectoryError::NotValid`] if the record fails the validity rule.
    /// * [`DirectoryError::AlreadyExists`] if the email is already present.
    fn add(&self, user: &User) -> Result<(), DirectoryError>;

    /// Overwrites the role of an existing user, keyed by email.
    ///
    /// # Errors
    /// * [`DirectoryError::NotValid`] if the record fails the validity rule.
    /// * [`DirectoryError::NotFound`] if the email is absent.
    fn update(&self, user: &User) -> Result<(), DirectoryError>;

    /// Removes the user with the given email.
    ///
    /// # Errors
    /// * [`DirectoryError::NotFound`] if the email is absent.
    fn delete(&self, email: &str) -> Result<(), DirectoryError>;

    /// Resolves an identity digest to the role of the matching user.
    ///
    /// # Errors
    /// * [`DirectoryError::NotFound`] if no stored email hashes to `digest`.
    fn role_for_digest(&self, digest: &str) -> Result<Role, DirectoryError>;
}

/// In-memory [`UserStore`] seeded with one bootstrap admin.
///
/// The handle is cheap to clone; all clones share the same map. State lives
/// for the process lifetime and is lost on restart, which is a deliberate
/// scope boundary of this service.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    users: Arc<RwLock<FxHashMap<String, Role>>>,
}

impl MemoryStore {
    /// Creates a store containing only the bootstrap admin entry.
    #[must_use]
    pub fn new(admin_email: impl Into<String>) -> Self {
        let mut users = FxHashMap::default();
        users.insert(admin_email.into(), Role::Admin);
        Self { users: Arc::new(RwLock::new(users)) }
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }
}

impl UserStore for MemoryStore {
    fn list(&self) -> Vec<User> {
        let users = self.users.read();
        users.iter().map(|(email, role)| User::new(email.clone(), *role)).collect()
    }

    fn add(&self, user: &User) -> Result<(), DirectoryError> {
        // Validity first, existence second; same order as update.
        let role = user.validate()?;

        let mut users = self.users.write();
        if users.contains_key(&user.email) {
            return Err(DirectoryError::AlreadyExists);
        }
        users.insert(user.email.clone(), role);
        Ok(())
    }

    fn update(&self, user: &User) -> Result<(), DirectoryError> {
        let role = user.validate()?;

        let mut users = self.users.write();
        match users.get_mut(&user.email) {
            Some(stored) => {
                *stored = role;
                Ok(())
            },
            None => Err(DirectoryError::NotFound),
        }
    }

    fn delete(&self, email: &str) -> Result<(), DirectoryError> {
        let mut users = self.users.write();
        users.remove(email).map(|_| ()).ok_or(DirectoryError::NotFound)
    }

    fn role_for_digest(&self, digest: &str) -> Result<Role, DirectoryError> {
        // Linear on purpose: digests are derived values, never stored, so
        // there is no reverse index to consult. Do not "optimize" this into
        // one without revisiting the threat model.
        let users = self.users.read();
        users
            .iter()
            .find(|(email, _)| sha256_hex(email) == digest)
            .map(|(_, role)| *role)
            .ok_or(DirectoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::constants::BOOTSTRAP_ADMIN_EMAIL;

    fn store_with_guests(guest_count: usize) -> MemoryStore {
        let store = MemoryStore::new(BOOTSTRAP_ADMIN_EMAIL);
        for i in 1..=guest_count {
            store.add(&User::new(format!("{i}@email.com"), Role::Guest)).unwrap();
        }
        store
    }

    #[test]
    fn list_returns_every_user() {
        let store = store_with_guests(4);
        let users = store.list();
        assert_eq!(users.len(), 5);
        assert!(users.iter().any(|u| u.email == BOOTSTRAP_ADMIN_EMAIL && u.role == "admin"));
    }

    #[test]
    fn add_then_duplicate_then_invalid() {
        let store = store_with_guests(0);

        let mut user = User::new("test@email.com", Role::Guest);
        assert_eq!(store.add(&user), Ok(()));

        // Same email again loses the uniqueness check.
        assert_eq!(store.add(&user), Err(DirectoryError::AlreadyExists));

        // An unrecognized role fails validity, regardless of uniqueness.
        user.role = "invalid".into();
        assert!(matches!(store.add(&user), Err(DirectoryError::NotValid(_))));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_rejects_empty_email() {
        let store = store_with_guests(0);
        let user = User { email: String::new(), role: "guest".into() };
        assert!(matches!(store.add(&user), Err(DirectoryError::NotValid(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_checks_validity_then_existence() {
        let store = store_with_guests(0);

        let mut user = User::new(BOOTSTRAP_ADMIN_EMAIL, Role::Guest);
        assert_eq!(store.update(&user), Ok(()));

        user.email = "fake@email.com".into();
        assert_eq!(store.update(&user), Err(DirectoryError::NotFound));

        // Invalid role reports NotValid even for an absent email.
        user.role = "invalid".into();
        assert!(matches!(store.update(&user), Err(DirectoryError::NotValid(_))));

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].role, "guest");
    }

    #[test]
    fn delete_removes_exactly_once() {
        let store = store_with_guests(4);

        assert_eq!(store.delete(BOOTSTRAP_ADMIN_EMAIL), Ok(()));
        assert_eq!(store.delete(BOOTSTRAP_ADMIN_EMAIL), Err(DirectoryError::NotFound));
        assert_eq!(store.delete("fake@email.com"), Err(DirectoryError::NotFound));
        assert_eq!(store.len(), 4);
        assert!(store.list().iter().all(|u| u.email != BOOTSTRAP_ADMIN_EMAIL));
    }

    #[test]
    fn digest_lookup_follows_membership() {
        let store = store_with_guests(0);
        store.add(&User::new("g@e.com", Role::Guest)).unwrap();

        assert_eq!(store.role_for_digest(&sha256_hex("g@e.com")), Ok(Role::Guest));
        assert_eq!(store.role_for_digest(&sha256_hex(BOOTSTRAP_ADMIN_EMAIL)), Ok(Role::Admin));

        store.delete("g@e.com").unwrap();
        assert_eq!(store.role_for_digest(&sha256_hex("g@e.com")), Err(DirectoryError::NotFound));
    }

    #[test]
    fn concurrent_adds_and_lists() {
        let store = store_with_guests(0);
        let before = store.len();

        let handles: Vec<_> = (0..64)
            .flat_map(|i| {
                let writer = store.clone();
                let reader = store.clone();
                let write = std::thread::spawn(move || {
                    writer.add(&User::new(format!("{i}@email.com"), Role::Guest)).unwrap();
                });
                let read = std::thread::spawn(move || {
                    // Entries are either fully absent or fully present with a
                    // parseable role; a snapshot never shows a torn record.
                    for user in reader.list() {
                        assert!(user.validate().is_ok());
                    }
                });
                [write, read]
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), before + 64);
    }

    #[test]
    fn concurrent_adds_of_same_email_race_cleanly() {
        let store = store_with_guests(0);

        let results: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.add(&User::new("dup@email.com", Role::Guest)))
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1, "exactly one concurrent add may succeed");
        assert_eq!(store.len(), 2);
    }
}
