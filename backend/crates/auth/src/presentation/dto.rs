//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub language: String,
    pub role: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
    pub user_id: Uuid,
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub user_role: String,
    pub language: String,
}

// ============================================================================
// Admin: user management
// ============================================================================

/// User summary for the admin listing (credential never included)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    pub user_role: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            user_id: *user.user_id.as_uuid(),
            email: user.email.as_str().to_string(),
            username: user.username.original().to_string(),
            user_role: user.role.code().to_string(),
            language: user.language.clone(),
            created_at: user.created_at,
        }
    }
}

/// Role update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// Generic success message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_language_defaults_empty() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"p1","username":"alice","role":"USER"}"#,
        )
        .unwrap();
        assert_eq!(req.language, "");
    }

    #[test]
    fn test_log_in_response_camel_case() {
        let response = LogInResponse {
            token: "t".to_string(),
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            user_role: "USER".to_string(),
            language: "en".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"userRole\""));
    }
}
