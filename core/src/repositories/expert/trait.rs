//! Expert repository trait defining the interface for profile persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::expert::Expert;
use crate::errors::DomainError;

/// Repository trait for Expert profile persistence operations
#[async_trait]
pub trait ExpertRepository: Send + Sync {
    /// Find an expert profile by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Expert>, DomainError>;

    /// Find the expert profile owned by a user account
    ///
    /// At most one profile exists per user id.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Expert>, DomainError>;

    /// Create an expert profile and promote the owning account to the
    /// expert role in a single transaction.
    ///
    /// Both writes commit together; failure of either rolls back both and
    /// is reported to the caller.
    ///
    /// # Returns
    /// * `Ok(Expert)` - The created profile
    /// * `Err(DomainError)` - Either write failed; nothing was persisted
    async fn create_with_role_upgrade(&self, expert: Expert) -> Result<Expert, DomainError>;

    /// Update an existing expert profile
    async fn update(&self, expert: Expert) -> Result<Expert, DomainError>;

    /// List all expert profiles
    async fn list_all(&self) -> Result<Vec<Expert>, DomainError>;

    /// Find expert profiles matching an expertise category
    async fn find_by_expertise(&self, expertise: &str) -> Result<Vec<Expert>, DomainError>;
}
