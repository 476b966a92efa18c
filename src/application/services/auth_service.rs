//! Session token authentication.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Session, SessionToken};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Length of generated raw tokens.
pub const TOKEN_LEN: usize = 48;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Resolves session tokens to viewer sessions and issues new tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn SessionRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<dyn SessionRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        hash_token(&self.signing_secret, token)
    }

    /// Resolves a raw token to the session of its user.
    ///
    /// On success the token's `last_used_at` is refreshed; a failure to do so
    /// is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is empty, unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Session, AppError> {
        if token.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Empty token" }),
            ));
        }

        let token_hash = self.hash_token(token);

        let session = self
            .repository
            .find_session(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or revoked token" }))
            })?;

        if let Err(e) = self.repository.touch(&token_hash).await {
            tracing::warn!(error = %e, user_id = session.user_id, "Failed to update token usage");
        }

        Ok(session)
    }

    /// Creates a new token for `user_id` and returns the raw value with its record.
    ///
    /// The raw value is not stored and cannot be recovered later.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_token(
        &self,
        user_id: i64,
        name: &str,
        raw: Option<String>,
    ) -> Result<(String, SessionToken), AppError> {
        let raw = raw.unwrap_or_else(generate_token);
        let record = self
            .repository
            .create_token(user_id, name, &self.hash_token(&raw))
            .await?;

        tracing::info!(token_id = record.id, user_id, "Issued session token");

        Ok((raw, record))
    }
}

/// HMAC-SHA256 of `token` keyed by `secret`, hex-encoded.
pub fn hash_token(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Generates a random alphanumeric token of [`TOKEN_LEN`] characters.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}
