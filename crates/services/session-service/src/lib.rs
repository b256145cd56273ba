//! Session Service Library
//!
//! This crate provides the session/identity provider of the investor
//! portal: who is signed in, and the login, logout and profile operations.

pub mod config;
pub mod service;

pub use service::{SessionManager, SessionService, SessionState};
