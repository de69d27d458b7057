//! Principal and Access Rules
//!
//! The request-scoped authenticated identity, and the declarative access
//! rules evaluated against it at operation boundaries.

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole, username::Username};

/// The authenticated identity associated with a request
///
/// Resolved once per request by the authentication gate; absent for
/// anonymous requests.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: UserId,
    pub username: Username,
    pub role: UserRole,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Declarative role requirement for an operation
///
/// A small closed rule set instead of scattered role checks:
/// an operation names its requirement, the guard evaluates it.
/// Ownership rules are separate - they live on the loaded resource
/// (`editable_by`-style methods), because ownership is a property of the
/// instance, not of the operation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including anonymous requests
    Public,
    /// Any authenticated principal
    Authenticated,
    /// Staff or Admin
    Staff,
    /// Admin only
    Admin,
}

impl Access {
    /// Evaluate this rule against the current request principal
    ///
    /// Missing principal on a non-public rule is an authentication
    /// failure (401); an authenticated principal with an insufficient
    /// role is an authorization failure (403). The two are never
    /// conflated.
    pub fn check(&self, principal: Option<&Principal>) -> AppResult<()> {
        let principal = match (self, principal) {
            (Access::Public, _) => return Ok(()),
            (_, Some(p)) => p,
            (_, None) => {
                return Err(AppError::unauthorized("Authentication required"));
            }
        };

        match self {
            Access::Public | Access::Authenticated => Ok(()),
            Access::Staff => {
                if principal.role.is_staff_or_higher() {
                    Ok(())
                } else {
                    Err(AppError::forbidden("Staff role required"))
                }
            }
            Access::Admin => {
                if principal.role.is_admin() {
                    Ok(())
                } else {
                    Err(AppError::forbidden("Admin role required"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: UserRole) -> Principal {
        Principal {
            user_id: UserId::new(),
            username: Username::new("alice").unwrap(),
            role,
        }
    }

    #[test]
    fn test_public_allows_anonymous() {
        assert!(Access::Public.check(None).is_ok());
        assert!(Access::Public.check(Some(&principal(UserRole::User))).is_ok());
    }

    #[test]
    fn test_authenticated_rejects_anonymous() {
        let err = Access::Authenticated.check(None).unwrap_err();
        assert_eq!(err.status_code(), 401);

        assert!(
            Access::Authenticated
                .check(Some(&principal(UserRole::User)))
                .is_ok()
        );
    }

    #[test]
    fn test_staff_gate() {
        let err = Access::Staff
            .check(Some(&principal(UserRole::User)))
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        assert!(Access::Staff.check(Some(&principal(UserRole::Staff))).is_ok());
        assert!(Access::Staff.check(Some(&principal(UserRole::Admin))).is_ok());

        // Anonymous is an authentication failure, not an authorization one
        assert_eq!(Access::Staff.check(None).unwrap_err().status_code(), 401);
    }

    #[test]
    fn test_admin_gate() {
        assert_eq!(
            Access::Admin
                .check(Some(&principal(UserRole::Staff)))
                .unwrap_err()
                .status_code(),
            403
        );
        assert!(Access::Admin.check(Some(&principal(UserRole::Admin))).is_ok());
    }

    #[test]
    fn test_principal_from_user() {
        use crate::domain::value_object::{
            email::Email, user_password::{RawPassword, UserPassword},
        };
        use crate::domain::entity::user::User;

        let raw = RawPassword::new("p1".to_string()).unwrap();
        let user = User::new(
            Email::new("a@x.com").unwrap(),
            Username::new("alice").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::Staff,
            "en".to_string(),
        );

        let principal = Principal::from(&user);
        assert_eq!(principal.user_id, user.user_id);
        assert_eq!(principal.role, UserRole::Staff);
    }
}
