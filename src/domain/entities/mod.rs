//! Core domain entities.
//!
//! - [`ShortLinkRecord`] - A short link as rendered by a link card
//! - [`Session`] - The viewing user, if any
//! - [`User`], [`SessionToken`] - Persisted records behind a session

pub mod session;
pub mod short_link;

pub use session::{Session, SessionToken, User};
pub use short_link::ShortLinkRecord;
