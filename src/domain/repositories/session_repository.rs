//! Repository trait for users and session tokens.

use crate::domain::entities::{Session, SessionToken, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for users and their session tokens.
///
/// Tokens are looked up by hash; raw tokens never reach the repository.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolves a token hash to the session of its user.
    ///
    /// Returns `Ok(None)` if the hash is unknown or the token is revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Updates the `last_used_at` timestamp of a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_user(&self, name: &str) -> Result<User, AppError>;

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_user(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Stores a new token hash for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<SessionToken, AppError>;

    /// Lists all tokens, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_tokens(&self) -> Result<Vec<SessionToken>, AppError>;

    /// Finds a token by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_token_by_id(&self, id: i64) -> Result<Option<SessionToken>, AppError>;

    /// Finds a token by its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_token_by_name(&self, name: &str) -> Result<Option<SessionToken>, AppError>;

    /// Revokes a token, preventing further sign-ins with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
