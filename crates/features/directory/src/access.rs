//! Role-based access decisions.

use crate::error::AccessError;
use crate::store::UserStore;
use roster_domain::user::Role;

/// Decides whether the caller holding `digest` may perform an action
/// restricted to `allowed` roles.
///
/// A pure decision over the store snapshot: no state, no retries. On success
/// the resolved role is returned so callers can log or propagate it.
///
/// # Errors
/// * [`AccessError::UnknownIdentity`] if the digest resolves to no user.
/// * [`AccessError::InsufficientRole`] if the resolved role is not allowed.
pub fn authorize(
    store: &dyn UserStore,
    digest: &str,
    allowed: &[Role],
) -> Result<Role, AccessError> {
    let role = store.role_for_digest(digest).map_err(|_| AccessError::UnknownIdentity)?;

    if allowed.contains(&role) {
        Ok(role)
    } else {
        Err(AccessError::InsufficientRole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use roster_domain::constants::BOOTSTRAP_ADMIN_EMAIL;
    use roster_domain::user::User;
    use roster_kernel::security::digest::sha256_hex;

    #[test]
    fn admin_digest_against_admin_set_permits() {
        let store = MemoryStore::new(BOOTSTRAP_ADMIN_EMAIL);
        let digest = sha256_hex(BOOTSTRAP_ADMIN_EMAIL);

        assert_eq!(authorize(&store, &digest, &[Role::Admin]), Ok(Role::Admin));
    }

    #[test]
    fn admin_digest_against_guest_set_is_insufficient() {
        let store = MemoryStore::new(BOOTSTRAP_ADMIN_EMAIL);
        let digest = sha256_hex(BOOTSTRAP_ADMIN_EMAIL);

        // Authenticated but unauthorized: not the same outcome as unknown.
        assert_eq!(authorize(&store, &digest, &[Role::Guest]), Err(AccessError::InsufficientRole));
    }

    #[test]
    fn unknown_digest_is_unauthenticated() {
        let store = MemoryStore::new(BOOTSTRAP_ADMIN_EMAIL);

        assert_eq!(
            authorize(&store, &sha256_hex("nobody@email.com"), &[Role::Admin]),
            Err(AccessError::UnknownIdentity)
        );
    }

    #[test]
    fn guest_permitted_when_guest_allowed() {
        let store = MemoryStore::new(BOOTSTRAP_ADMIN_EMAIL);
        store.add(&User::new("g@e.com", Role::Guest)).unwrap();

        let digest = sha256_hex("g@e.com");
        assert_eq!(authorize(&store, &digest, &[Role::Admin, Role::Guest]), Ok(Role::Guest));
    }
}
