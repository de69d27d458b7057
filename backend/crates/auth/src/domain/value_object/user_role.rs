use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a principal, as a closed set.
///
/// An unknown role is a parse failure at the boundary, never a silently
/// false comparison inside the authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    User = 0,
    Staff = 1,
    Admin = 2,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Wire/API code for this role
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "USER",
            Staff => "STAFF",
            Admin => "ADMIN",
        }
    }

    /// Staff and Admin may publish events
    #[inline]
    pub const fn is_staff_or_higher(&self) -> bool {
        use UserRole::*;
        matches!(self, Staff | Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(User),
            1 => Some(Staff),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "USER" => Some(User),
            "STAFF" => Some(Staff),
            "ADMIN" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(0), Some(UserRole::User));
        assert_eq!(UserRole::from_id(1), Some(UserRole::Staff));
        assert_eq!(UserRole::from_id(2), Some(UserRole::Admin));
        assert_eq!(UserRole::from_id(99), None);
    }

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("USER"), Some(UserRole::User));
        assert_eq!(UserRole::from_code("STAFF"), Some(UserRole::Staff));
        assert_eq!(UserRole::from_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("admin"), None);
        assert_eq!(UserRole::from_code("SUPERVISOR"), None);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::User.to_string(), "USER");
        assert_eq!(UserRole::Staff.to_string(), "STAFF");
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::User.is_staff_or_higher());
        assert!(UserRole::Staff.is_staff_or_higher());
        assert!(UserRole::Admin.is_staff_or_higher());
        assert!(!UserRole::User.is_admin());
        assert!(!UserRole::Staff.is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }
}
