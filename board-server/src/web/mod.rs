//! Web layer: routes, templates, and shared state.
//!
//! The browser is the input-event source; each endpoint corresponds to
//! one [`SessionEvent`](crate::session::SessionEvent). Markup lives in
//! the askama templates, never in core code.

mod dto;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
