//! Session and identity business logic.

mod session_service;

pub use session_service::{SessionManager, SessionService, SessionState};
