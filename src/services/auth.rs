//! Identity service — fixed credential table plus fabricated signups.
//!
//! There is no real account backend. Login validates against three seeded
//! accounts; signup mints a fresh user record without touching the table.
//! Passwords are compared as sha256 digests so the plaintext never sits in a
//! long-lived struct.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Parent,
    Teacher,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Deliberately generic: the caller must not learn whether the email or
    /// the password was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("invalid email")]
    InvalidEmail,
    #[error("name must not be empty")]
    EmptyName,
    #[error("password must not be empty")]
    EmptyPassword,
}

struct Account {
    email: &'static str,
    password_hash: &'static str,
    user_id: &'static str,
    name: &'static str,
    role: UserRole,
}

// sha256("password") — all three demo accounts share it.
const DEMO_PASSWORD_HASH: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

const ACCOUNTS: &[Account] = &[
    Account {
        email: "student@example.com",
        password_hash: DEMO_PASSWORD_HASH,
        user_id: "student1",
        name: "Ahmed Student",
        role: UserRole::Student,
    },
    Account {
        email: "parent@example.com",
        password_hash: DEMO_PASSWORD_HASH,
        user_id: "parent1",
        name: "Fatima Parent",
        role: UserRole::Parent,
    },
    Account {
        email: "teacher@example.com",
        password_hash: DEMO_PASSWORD_HASH,
        user_id: "teacher1",
        name: "Umar Teacher",
        role: UserRole::Teacher,
    },
];

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Validate a login against the fixed credential table.
///
/// # Errors
///
/// `InvalidCredentials` for any pair that does not match a seeded account.
pub fn login(email: &str, password: &str) -> Result<User, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;
    let hash = hash_password(password);

    let account = ACCOUNTS
        .iter()
        .find(|a| a.email == normalized && a.password_hash == hash)
        .ok_or(AuthError::InvalidCredentials)?;

    Ok(User {
        id: account.user_id.to_owned(),
        name: account.name.to_owned(),
        email: account.email.to_owned(),
        role: account.role,
    })
}

/// Fabricate a new user record for signup.
///
/// # Errors
///
/// Rejects an empty name, a malformed email, or an empty password.
pub fn signup(name: &str, email: &str, password: &str, role: UserRole) -> Result<User, AuthError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AuthError::EmptyName);
    }
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }

    Ok(User { id: format!("user-{}", Uuid::new_v4()), name: name.to_owned(), email, role })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
