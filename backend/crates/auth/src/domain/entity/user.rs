//! User Entity
//!
//! The single user aggregate: identity, credential, authorization
//! attribute and UI preference.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
    username::Username,
};

/// User entity
///
/// # Invariants
/// - `user_id` is assigned at creation and never changes.
/// - `email` and the canonical form of `username` are globally unique.
/// - `password_hash` is opaque and never rendered into logs or responses.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (token subject)
    pub user_id: UserId,
    /// Login identifier (unique)
    pub email: Email,
    /// Display handle (unique by canonical form)
    pub username: Username,
    /// Hashed credential
    pub password_hash: UserPassword,
    /// Role (User, Staff, Admin)
    pub role: UserRole,
    /// Preferred UI language tag (non-authoritative hint)
    pub language: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        email: Email,
        username: Username,
        password_hash: UserPassword,
        role: UserRole,
        language: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            username,
            password_hash,
            role,
            language,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the user's role (admin operation)
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
