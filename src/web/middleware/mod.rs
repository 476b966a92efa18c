//! HTTP middleware for the dashboard.
//!
//! Provides cookie sessions, rate limiting, and request tracing.

pub mod rate_limit;
pub mod tracing;
pub mod web_auth;
