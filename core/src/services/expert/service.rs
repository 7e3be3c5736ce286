//! Expert profile management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::expert::Expert;
use crate::errors::{DomainError, DomainResult, ExpertError};
use crate::repositories::{ExpertRepository, UserRepository};

/// Service managing expert profiles and the user-to-expert promotion
pub struct ExpertService<U, E>
where
    U: UserRepository,
    E: ExpertRepository,
{
    user_repository: Arc<U>,
    expert_repository: Arc<E>,
}

impl<U, E> ExpertService<U, E>
where
    U: UserRepository,
    E: ExpertRepository,
{
    /// Create a new expert service
    pub fn new(user_repository: Arc<U>, expert_repository: Arc<E>) -> Self {
        Self {
            user_repository,
            expert_repository,
        }
    }

    /// Create an expert profile for a user account.
    ///
    /// The profile insert and the promotion of the account to the expert
    /// role are a single two-phase write committed together by the
    /// repository; a failure of either phase aborts both and is reported,
    /// never swallowed.
    ///
    /// # Errors
    /// * `ExpertError::UserNotFound` - no such account
    /// * `Validation` - non-positive hourly rate
    /// * `ExpertError::ProfileAlreadyExists` - the account already owns a profile
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        bio: String,
        expertise: String,
        hourly_rate: f64,
    ) -> DomainResult<Expert> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(ExpertError::UserNotFound.into());
        }

        if hourly_rate <= 0.0 || !hourly_rate.is_finite() {
            return Err(DomainError::Validation {
                message: "Hourly rate must be a positive number".to_string(),
            });
        }

        if self
            .expert_repository
            .find_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(ExpertError::ProfileAlreadyExists.into());
        }

        let expert = Expert::new(user_id, bio, expertise, hourly_rate);
        let created = self
            .expert_repository
            .create_with_role_upgrade(expert)
            .await?;

        info!(expert_id = %created.id, user_id = %user_id, "created expert profile");
        Ok(created)
    }

    /// Fetch the profile owned by a user account
    pub async fn get_profile_by_user(&self, user_id: Uuid) -> DomainResult<Expert> {
        self.expert_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ExpertError::ExpertNotFound.into())
    }

    /// Fetch an expert profile by its id
    pub async fn get_expert(&self, expert_id: Uuid) -> DomainResult<Expert> {
        self.expert_repository
            .find_by_id(expert_id)
            .await?
            .ok_or_else(|| ExpertError::ExpertNotFound.into())
    }

    /// Partially update the caller's profile; `None` fields are untouched
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        bio: Option<String>,
        expertise: Option<String>,
        hourly_rate: Option<f64>,
    ) -> DomainResult<Expert> {
        if let Some(rate) = hourly_rate {
            if rate <= 0.0 || !rate.is_finite() {
                return Err(DomainError::Validation {
                    message: "Hourly rate must be a positive number".to_string(),
                });
            }
        }

        let mut expert = self
            .expert_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(ExpertError::ExpertNotFound)?;

        expert.apply_update(bio, expertise, hourly_rate);
        self.expert_repository.update(expert).await
    }

    /// List all expert profiles
    pub async fn list_experts(&self) -> DomainResult<Vec<Expert>> {
        self.expert_repository.list_all().await
    }

    /// Find experts by expertise category
    pub async fn search_by_expertise(&self, expertise: &str) -> DomainResult<Vec<Expert>> {
        self.expert_repository.find_by_expertise(expertise).await
    }
}
