//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`clipboard`] - OS clipboard behind the copy button
//! - [`terminal_notifier`] - Notifications for command-line use

pub mod clipboard;
pub mod persistence;
pub mod terminal_notifier;
