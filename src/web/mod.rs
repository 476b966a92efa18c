//! Web dashboard layer for browser-based UI.
//!
//! Server-rendered pages built from link cards, using Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Page and health handlers
//! - [`dto`] - Query string and form payloads
//! - [`middleware`] - Session, rate limiting and tracing layers
//! - [`routes`] - Dashboard route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
