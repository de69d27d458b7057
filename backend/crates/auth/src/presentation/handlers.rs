//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    LogInInput, LogInUseCase, ManageUsersUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LogInRequest, LogInResponse, MessageResponse, SignUpRequest, SignUpResponse, UpdateRoleRequest,
    UserSummary,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/users/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<SignUpResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            email: req.email,
            password: req.password,
            username: req.username,
            language: req.language,
            role: req.role,
        })
        .await?;

    Ok(Json(SignUpResponse {
        message: "Signup successful".to_string(),
        user_id: *output.user_id.as_uuid(),
    }))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/users/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<LogInResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LogInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LogInResponse {
        token: output.token,
        user_id: *output.user_id.as_uuid(),
        username: output.username,
        user_role: output.role.code().to_string(),
        language: output.language,
    }))
}

// ============================================================================
// Admin: user management
// ============================================================================

/// GET /api/admin/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserSummary>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageUsersUseCase::new(state.repo.clone());
    let users = use_case.list().await?;

    Ok(Json(users.iter().map(UserSummary::from).collect()))
}

/// PUT /api/admin/users/{user_id}/role
pub async fn update_user_role<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageUsersUseCase::new(state.repo.clone());
    use_case
        .update_role(&UserId::from_uuid(user_id), &req.role)
        .await?;

    Ok(Json(MessageResponse {
        message: "Role updated".to_string(),
    }))
}
