//! Domain layer containing entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Data records shared by every layer
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation.
//! Short link records are only read here; creating, editing and counting
//! views belongs to the shortener backend that owns the `short_links` table.

pub mod entities;
pub mod repositories;
