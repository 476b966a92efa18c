//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Short link lookups
//! - [`PgSessionRepository`] - Users and session tokens

pub mod pg_link_repository;
pub mod pg_session_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_session_repository::PgSessionRepository;
