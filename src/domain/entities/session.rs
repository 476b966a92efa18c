//! Viewer session and the persisted records backing it.

use chrono::{DateTime, Utc};

/// The user viewing a page, resolved from a session token.
///
/// Carried into the options menu to decide which actions are offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub user_name: String,
}

impl Session {
    /// Returns true if this session owns a record created by `owner`.
    pub fn owns(&self, owner: Option<i64>) -> bool {
        owner == Some(self.user_id)
    }
}

/// A dashboard user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Session token metadata.
///
/// Only the HMAC-SHA256 hash of the raw token is stored.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Returns true if the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
