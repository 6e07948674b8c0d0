use roster_domain::user::InvalidUser;

/// Everything the directory store can fail with.
///
/// Every variant is a normal, expected outcome of invalid input or a race
/// lost against another caller; none of them is fatal and none is logged by
/// the store itself. The boundary layer owns the mapping to response codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The supplied user record fails the validity rule.
    #[error("user not valid: {0}")]
    NotValid(InvalidUser),

    /// An add targeted an email that is already present.
    #[error("user already exists")]
    AlreadyExists,

    /// An update, delete, or digest lookup targeted an absent entry.
    #[error("user not found")]
    NotFound,
}

impl From<InvalidUser> for DirectoryError {
    fn from(reason: InvalidUser) -> Self {
        Self::NotValid(reason)
    }
}

/// Outcome of an authorization check that did not permit the caller.
///
/// The two variants are deliberately distinct: an unknown identity and a
/// known identity with an insufficient role surface as different response
/// codes at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The digest resolved to no stored user.
    #[error("unknown identity")]
    UnknownIdentity,

    /// The caller is authenticated but its role is not in the allowed set.
    #[error("insufficient permissions")]
    InsufficientRole,
}
