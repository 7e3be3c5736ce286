//! Authentication service implementation.

use std::sync::Arc;

use tracing::{info, warn};

use sb_shared::utils::validation::validators;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 72; // bcrypt input limit

/// Authentication service for account registration and login
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Register a new account.
    ///
    /// Every new account starts with the `User` role; expert capability is
    /// only granted later through explicit profile creation.
    ///
    /// # Errors
    /// * `Validation` - empty name, malformed email, or password outside
    ///   the accepted length range
    /// * `AuthError::EmailAlreadyRegistered` - the email is taken
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        if !validators::not_empty(name) {
            return Err(DomainError::Validation {
                message: "Name must not be empty".to_string(),
            });
        }
        if !validators::is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        if !validators::length_between(password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) {
            return Err(DomainError::Validation {
                message: format!(
                    "Password must be between {} and {} characters",
                    MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                ),
            });
        }

        if self.user_repository.exists_by_email(email).await? {
            warn!(email, "registration rejected: email already in use");
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = super::password::hash_password(password)?;
        let user = User::new(name.to_string(), email.to_string(), password_hash);
        let created = self.user_repository.create(user).await?;

        info!(user_id = %created.id, "registered new account");
        Ok(created)
    }

    /// Authenticate an account and issue an access token.
    ///
    /// Unknown email and wrong password produce the same
    /// `AuthError::InvalidCredentials` so callers cannot probe for accounts.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !super::password::verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "login rejected: bad password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self
            .token_service
            .generate_access_token(user.id, user.role)?;

        info!(user_id = %user.id, "login succeeded");
        Ok(AuthResponse::bearer(
            access_token,
            self.token_service.expires_in(),
            user.id,
            user.role,
        ))
    }
}
