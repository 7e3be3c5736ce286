//! JWT token service implementation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sb_shared::config::JwtConfig;

use crate::domain::entities::user::UserRole;
use crate::errors::TokenError;

/// Claims carried inside an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Role of the account at issuance time
    pub role: String,
    /// Issuer
    pub iss: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Token id for tracing
    pub jti: String,
}

impl Claims {
    /// Parse the subject claim into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }

    /// Parse the role claim into the closed role enum
    pub fn user_role(&self) -> Result<UserRole, TokenError> {
        UserRole::parse(&self.role).ok_or(TokenError::InvalidClaims)
    }
}

/// Stateless HS256 token service
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// Create a new token service from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Seconds an issued access token remains valid
    pub fn expires_in(&self) -> i64 {
        self.config.access_token_expiry
    }

    /// Issue a signed access token for a user
    pub fn generate_access_token(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            iss: self.config.issuer.clone(),
            iat: now,
            exp: now + self.config.access_token_expiry,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verify a token's signature, expiry and issuer, returning its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::InvalidIssuer => TokenError::InvalidClaims,
            _ => TokenError::InvalidTokenFormat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new("test-secret-for-unit-tests"))
    }

    #[test]
    fn test_token_round_trip() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, UserRole::Expert)
            .unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.user_role().unwrap(), UserRole::Expert);
        assert_eq!(claims.iss, "slotbook");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let token = service
            .generate_access_token(Uuid::new_v4(), UserRole::User)
            .unwrap();

        let other = TokenService::new(JwtConfig::new("a-different-secret-entirely"));
        let result = other.verify_access_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig {
            access_token_expiry: -3600,
            ..JwtConfig::new("test-secret-for-unit-tests")
        };
        let service = TokenService::new(config);

        let token = service
            .generate_access_token(Uuid::new_v4(), UserRole::User)
            .unwrap();
        let result = TokenService::new(JwtConfig::new("test-secret-for-unit-tests"))
            .verify_access_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = service().verify_access_token("not.a.jwt");
        assert!(result.is_err());
    }
}
