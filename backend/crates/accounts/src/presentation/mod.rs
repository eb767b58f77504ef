//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountAppState;
pub use middleware::{CurrentAccount, SessionGateState, require_session};
pub use router::{accounts_router, accounts_router_generic};
