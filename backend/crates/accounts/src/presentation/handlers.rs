//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::application::config::AccountConfig;
use crate::application::session::SessionTokenIssuer;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, GetProfileUseCase, ProfilePatch, RegisterInput,
    RegisterUseCase, UpdateProfileUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{
    AuthenticateRequest, MessageResponse, ProfileResponse, RegisterRequest, UpdateProfileRequest,
};
use crate::presentation::middleware::CurrentAccount;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R, T>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub hasher: Arc<PasswordHasher>,
    pub tokens: Arc<T>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users/
pub async fn register<R, T>(
    State(state): State<AccountAppState<R, T>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
    );

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(ProfileResponse::from(&output.account)),
    ))
}

// ============================================================================
// Authenticate
// ============================================================================

/// POST /api/users/auth
pub async fn authenticate<R, T>(
    State(state): State<AccountAppState<R, T>>,
    Json(req): Json<AuthenticateRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
    );

    let input = AuthenticateInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(ProfileResponse::from(&output.account)),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/users/logout
///
/// Unconditionally overwrites the session cookie with an empty value
/// expiring at the epoch. Always succeeds; no account state is touched.
pub async fn logout<R, T>(State(state): State<AccountAppState<R, T>>) -> impl IntoResponse
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let cookie = build_clear_cookie(&state.config);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "User logged out".to_string(),
        }),
    )
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/users/profile
pub async fn get_profile<R, T>(
    State(state): State<AccountAppState<R, T>>,
    Extension(identity): Extension<CurrentAccount>,
) -> AccountResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let account = use_case.execute(&identity.0).await?;

    Ok(Json(ProfileResponse::from(&account)))
}

/// PUT /api/users/profile
pub async fn update_profile<R, T>(
    State(state): State<AccountAppState<R, T>>,
    Extension(identity): Extension<CurrentAccount>,
    Json(req): Json<UpdateProfileRequest>,
) -> AccountResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.hasher.clone());

    let patch = ProfilePatch {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let account = use_case.execute(&identity.0, patch).await?;

    Ok(Json(ProfileResponse::from(&account)))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_session_cookie(config: &AccountConfig, token: &str) -> String {
    config.session_cookie().build_set_cookie(token)
}

fn build_clear_cookie(config: &AccountConfig) -> String {
    config.session_cookie().build_delete_cookie()
}
