//! Accounts Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::application::config::AccountConfig;
use crate::application::session::{JwtSessionIssuer, SessionTokenIssuer};
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{SessionGateState, require_session};

/// Create the accounts router with PostgreSQL repository and JWT sessions
pub fn accounts_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    let tokens = JwtSessionIssuer::new(&config);
    accounts_router_generic(repo, tokens, config)
}

/// Create a generic accounts router for any repository / token backend
pub fn accounts_router_generic<R, T>(repo: R, tokens: T, config: AccountConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: SessionTokenIssuer + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let tokens = Arc::new(tokens);

    let state = AccountAppState {
        repo: Arc::new(repo),
        hasher: Arc::new(PasswordHasher::new(config.hash_cost)),
        tokens: tokens.clone(),
        config: config.clone(),
    };

    let gate = SessionGateState { tokens, config };

    // route_layer only wraps the routes registered before it, so the
    // session gate covers /profile and nothing else.
    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile::<R, T>).put(handlers::update_profile::<R, T>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_session::<T>))
        .route("/", post(handlers::register::<R, T>))
        .route("/auth", post(handlers::authenticate::<R, T>))
        .route("/logout", post(handlers::logout::<R, T>))
        .with_state(state)
}
