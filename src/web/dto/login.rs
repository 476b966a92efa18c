//! Login form payload.

use serde::Deserialize;
use validator::Validate;

/// `POST /dashboard/login` form body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 256, message = "Token must be 1-256 characters"))]
    pub token: String,
}
