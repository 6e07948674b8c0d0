//! User and role types for the directory.
//!
//! A [`User`] is the wire-level record: the role travels as a plain string so
//! that the store can own the validity rule and report unrecognized roles as
//! a domain error instead of a deserialization failure. Only parsed [`Role`]
//! values are ever held inside the directory itself.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The set of roles a user can hold. Anything else is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guest,
}

/// A directory entry as it appears on the wire.
///
/// The email is the unique identifier; there is no surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: String,
}

impl User {
    /// Creates a wire record from an already-parsed role.
    #[must_use]
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self { email: email.into(), role: role.to_string() }
    }

    /// Applies the validity rule shared by add/update: the email must be
    /// non-empty and the role must parse.
    ///
    /// Returns the parsed [`Role`] so callers never re-parse.
    ///
    /// # Errors
    /// Returns [`InvalidUser`] describing which part of the record failed.
    pub fn validate(&self) -> Result<Role, InvalidUser> {
        if self.email.is_empty() {
            return Err(InvalidUser::EmptyEmail);
        }
        // future: could have some "actual" email validation here
        Role::from_str(&self.role).map_err(|_| InvalidUser::UnknownRole(self.role.clone()))
    }
}

/// Why a [`User`] record failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUser {
    EmptyEmail,
    UnknownRole(String),
}

impl std::fmt::Display for InvalidUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::UnknownRole(role) => write!(f, "unknown role: {role}"),
        }
    }
}
