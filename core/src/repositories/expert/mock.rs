//! Mock implementation of ExpertRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::expert::Expert;
use crate::errors::{DomainError, ExpertError};

use super::trait_::ExpertRepository;

/// Mock expert repository for testing
pub struct MockExpertRepository {
    experts: Arc<RwLock<HashMap<Uuid, Expert>>>,
    /// User ids promoted to the expert role by `create_with_role_upgrade`
    promoted: Arc<RwLock<Vec<Uuid>>>,
}

impl MockExpertRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            experts: Arc::new(RwLock::new(HashMap::new())),
            promoted: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seed the repository with an existing profile
    pub async fn insert(&self, expert: Expert) {
        self.experts.write().await.insert(expert.id, expert);
    }

    /// User ids whose role upgrade was committed
    pub async fn promoted_users(&self) -> Vec<Uuid> {
        self.promoted.read().await.clone()
    }
}

impl Default for MockExpertRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpertRepository for MockExpertRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Expert>, DomainError> {
        let experts = self.experts.read().await;
        Ok(experts.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Expert>, DomainError> {
        let experts = self.experts.read().await;
        Ok(experts.values().find(|e| e.user_id == user_id).cloned())
    }

    async fn create_with_role_upgrade(&self, expert: Expert) -> Result<Expert, DomainError> {
        let mut experts = self.experts.write().await;

        if experts.values().any(|e| e.user_id == expert.user_id) {
            return Err(ExpertError::ProfileAlreadyExists.into());
        }

        experts.insert(expert.id, expert.clone());
        self.promoted.write().await.push(expert.user_id);
        Ok(expert)
    }

    async fn update(&self, expert: Expert) -> Result<Expert, DomainError> {
        let mut experts = self.experts.write().await;

        if !experts.contains_key(&expert.id) {
            return Err(DomainError::NotFound {
                resource: "Expert".to_string(),
            });
        }

        experts.insert(expert.id, expert.clone());
        Ok(expert)
    }

    async fn list_all(&self) -> Result<Vec<Expert>, DomainError> {
        let experts = self.experts.read().await;
        Ok(experts.values().cloned().collect())
    }

    async fn find_by_expertise(&self, expertise: &str) -> Result<Vec<Expert>, DomainError> {
        let experts = self.experts.read().await;
        Ok(experts
            .values()
            .filter(|e| e.expertise == expertise)
            .cloned()
            .collect())
    }
}
