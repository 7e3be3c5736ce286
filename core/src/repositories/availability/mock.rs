//! Mock implementation of AvailabilityRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::availability_slot::AvailabilitySlot;
use crate::errors::DomainError;

use super::trait_::AvailabilityRepository;

/// Mock availability repository for testing
pub struct MockAvailabilityRepository {
    slots: Arc<RwLock<HashMap<Uuid, AvailabilitySlot>>>,
}

impl MockAvailabilityRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing slot
    pub async fn insert(&self, slot: AvailabilitySlot) {
        self.slots.write().await.insert(slot.id, slot);
    }

    /// Number of stored slots
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }
}

impl Default for MockAvailabilityRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_by_weekday_and_start(slots: &mut [AvailabilitySlot]) {
    slots.sort_by(|a, b| {
        a.weekday
            .cmp(&b.weekday)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

#[async_trait]
impl AvailabilityRepository for MockAvailabilityRepository {
    async fn create(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError> {
        let mut slots = self.slots.write().await;
        slots.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().await;
        Ok(slots.get(&id).cloned())
    }

    async fn find_by_id_for_expert(
        &self,
        id: Uuid,
        expert_id: Uuid,
    ) -> Result<Option<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().await;
        Ok(slots
            .get(&id)
            .filter(|s| s.expert_id == expert_id)
            .cloned())
    }

    async fn find_by_expert(
        &self,
        expert_id: Uuid,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().await;
        let mut result: Vec<_> = slots
            .values()
            .filter(|s| s.expert_id == expert_id)
            .cloned()
            .collect();
        sort_by_weekday_and_start(&mut result);
        Ok(result)
    }

    async fn find_by_expert_and_weekday(
        &self,
        expert_id: Uuid,
        weekday: u8,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().await;
        let mut result: Vec<_> = slots
            .values()
            .filter(|s| s.expert_id == expert_id && s.weekday == weekday)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(result)
    }

    async fn update(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError> {
        let mut slots = self.slots.write().await;

        if !slots.contains_key(&slot.id) {
            return Err(DomainError::NotFound {
                resource: "AvailabilitySlot".to_string(),
            });
        }

        slots.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn delete_for_expert(&self, id: Uuid, expert_id: Uuid) -> Result<bool, DomainError> {
        let mut slots = self.slots.write().await;
        match slots.get(&id) {
            Some(slot) if slot.expert_id == expert_id => {
                slots.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
