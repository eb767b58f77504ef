//! Session Gate Middleware
//!
//! Verifies the session cookie before protected routes and injects the
//! resolved account identity into the request extensions. Handlers
//! behind the gate trust that identity without re-verifying.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session::SessionTokenIssuer;
use crate::domain::value_object::account_id::AccountId;
use crate::error::AccountError;

/// Identity of the verified session, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentAccount(pub AccountId);

/// Middleware state
#[derive(Clone)]
pub struct SessionGateState<T>
where
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    pub tokens: Arc<T>,
    pub config: Arc<AccountConfig>,
}

/// Middleware that requires a valid session token
pub async fn require_session<T>(
    State(state): State<SessionGateState<T>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
            .ok_or_else(|| AccountError::InvalidSession.into_response())?;

    let account_id = state
        .tokens
        .verify(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentAccount(account_id));

    Ok(next.run(req).await)
}
