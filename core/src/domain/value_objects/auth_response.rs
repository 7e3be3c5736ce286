//! Authentication response value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserRole;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token
    pub access_token: String,

    /// Token type for the Authorization header
    pub token_type: String,

    /// Seconds until the access token expires
    pub expires_in: i64,

    /// Authenticated user id
    pub user_id: Uuid,

    /// Role carried in the token claims
    pub role: UserRole,
}

impl AuthResponse {
    /// Creates a bearer-token response
    pub fn bearer(access_token: String, expires_in: i64, user_id: Uuid, role: UserRole) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user_id,
            role,
        }
    }
}
