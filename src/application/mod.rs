//! Application layer services.
//!
//! Services consume repository traits and give handlers and the admin CLI a
//! small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link lookups for cards
//! - [`services::auth_service::AuthService`] - Session token authentication

pub mod services;
