// src/auth/mod.rs
// DOCUMENTATION: Authentication module organization
// PURPOSE: Session-backed login state and credential handling

pub mod middleware;
pub mod service;

pub use middleware::*;
pub use service::AuthService;
