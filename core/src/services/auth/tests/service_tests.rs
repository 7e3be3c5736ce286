//! Unit tests for the authentication service

use std::sync::Arc;

use sb_shared::config::JwtConfig;

use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::MockUserRepository;
use crate::services::auth::AuthService;
use crate::services::token::TokenService;

fn service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(JwtConfig::new("unit-test-secret")));
    (AuthService::new(repo.clone(), tokens), repo)
}

#[tokio::test]
async fn test_register_creates_user_account() {
    let (service, _repo) = service();

    let user = service
        .register("Alice", "alice@example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::User);
    assert_ne!(user.password_hash, "hunter2hunter2");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (service, _repo) = service();

    service
        .register("Alice", "alice@example.com", "hunter2hunter2")
        .await
        .unwrap();
    let result = service
        .register("Other Alice", "alice@example.com", "differentpass1")
        .await;

    match result.unwrap_err() {
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => {}
        other => panic!("expected EmailAlreadyRegistered, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let (service, _repo) = service();

    assert!(service
        .register("", "alice@example.com", "hunter2hunter2")
        .await
        .is_err());
    assert!(service
        .register("Alice", "not-an-email", "hunter2hunter2")
        .await
        .is_err());
    assert!(service
        .register("Alice", "alice@example.com", "short")
        .await
        .is_err());
}

#[tokio::test]
async fn test_login_issues_token() {
    let (service, _repo) = service();
    let user = service
        .register("Alice", "alice@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let response = service
        .login("alice@example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert_eq!(response.user_id, user.id);
    assert_eq!(response.role, UserRole::User);
    assert_eq!(response.token_type, "Bearer");
    assert!(!response.access_token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (service, _repo) = service();
    service
        .register("Alice", "alice@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let unknown_email = service
        .login("nobody@example.com", "hunter2hunter2")
        .await
        .unwrap_err();
    let wrong_password = service
        .login("alice@example.com", "wrong-password")
        .await
        .unwrap_err();

    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    match unknown_email {
        DomainError::Auth(AuthError::InvalidCredentials) => {}
        other => panic!("expected InvalidCredentials, got {:?}", other),
    }
}
