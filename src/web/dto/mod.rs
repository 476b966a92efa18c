//! Request and response payloads for web handlers.

pub mod card;
pub mod health;
pub mod login;
pub mod pagination;
