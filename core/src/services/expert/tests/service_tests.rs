//! Unit tests for the expert profile service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ExpertError};
use crate::repositories::expert::MockExpertRepository;
use crate::repositories::user::MockUserRepository;
use crate::services::expert::ExpertService;

async fn service_with_user() -> (
    ExpertService<MockUserRepository, MockExpertRepository>,
    Arc<MockExpertRepository>,
    Uuid,
) {
    let users = Arc::new(MockUserRepository::new());
    let experts = Arc::new(MockExpertRepository::new());

    let user = User::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    );
    let user_id = user.id;
    users.insert(user).await;

    (ExpertService::new(users, experts.clone()), experts, user_id)
}

#[tokio::test]
async fn test_create_profile_promotes_user() {
    let (service, experts, user_id) = service_with_user().await;

    let expert = service
        .create_profile(user_id, "bio".to_string(), "plumbing".to_string(), 80.0)
        .await
        .unwrap();

    assert_eq!(expert.user_id, user_id);
    assert!(!expert.is_verified);
    // Role upgrade committed together with the profile insert
    assert_eq!(experts.promoted_users().await, vec![user_id]);
}

#[tokio::test]
async fn test_create_profile_unknown_user() {
    let (service, _experts, _user_id) = service_with_user().await;

    let result = service
        .create_profile(Uuid::new_v4(), "bio".to_string(), "tax".to_string(), 50.0)
        .await;

    match result.unwrap_err() {
        DomainError::Expert(ExpertError::UserNotFound) => {}
        other => panic!("expected UserNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_profile_rejects_second_profile() {
    let (service, experts, user_id) = service_with_user().await;

    service
        .create_profile(user_id, "bio".to_string(), "plumbing".to_string(), 80.0)
        .await
        .unwrap();
    let result = service
        .create_profile(user_id, "other".to_string(), "tax".to_string(), 60.0)
        .await;

    match result.unwrap_err() {
        DomainError::Expert(ExpertError::ProfileAlreadyExists) => {}
        other => panic!("expected ProfileAlreadyExists, got {:?}", other),
    }
    // No second promotion happened
    assert_eq!(experts.promoted_users().await.len(), 1);
}

#[tokio::test]
async fn test_create_profile_rejects_bad_rate() {
    let (service, _experts, user_id) = service_with_user().await;

    for rate in [0.0, -5.0, f64::NAN] {
        let result = service
            .create_profile(user_id, "bio".to_string(), "tax".to_string(), rate)
            .await;
        assert!(result.is_err(), "rate {} should be rejected", rate);
    }
}

#[tokio::test]
async fn test_update_profile_partial() {
    let (service, _experts, user_id) = service_with_user().await;
    service
        .create_profile(user_id, "bio".to_string(), "plumbing".to_string(), 80.0)
        .await
        .unwrap();

    let updated = service
        .update_profile(user_id, None, None, Some(95.0))
        .await
        .unwrap();

    assert_eq!(updated.bio, "bio");
    assert_eq!(updated.expertise, "plumbing");
    assert_eq!(updated.hourly_rate, 95.0);
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let (service, _experts, user_id) = service_with_user().await;

    let result = service.get_profile_by_user(user_id).await;
    match result.unwrap_err() {
        DomainError::Expert(ExpertError::ExpertNotFound) => {}
        other => panic!("expected ExpertNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_by_expertise() {
    let (service, _experts, user_id) = service_with_user().await;
    service
        .create_profile(user_id, "bio".to_string(), "plumbing".to_string(), 80.0)
        .await
        .unwrap();

    let hits = service.search_by_expertise("plumbing").await.unwrap();
    assert_eq!(hits.len(), 1);

    let misses = service.search_by_expertise("carpentry").await.unwrap();
    assert!(misses.is_empty());
}
