//! Availability repository trait for recurring weekly slots.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::availability_slot::AvailabilitySlot;
use crate::errors::DomainError;

/// Repository trait for recurring AvailabilitySlot persistence operations
///
/// Ordering guarantees are part of the contract: listing methods return
/// deterministic display order so callers never re-sort.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Create a new recurring slot
    async fn create(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError>;

    /// Find a slot by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AvailabilitySlot>, DomainError>;

    /// Find a slot by id, restricted to a given owning expert
    ///
    /// Returns `Ok(None)` both when the slot does not exist and when it is
    /// owned by a different expert; callers cannot distinguish the two.
    async fn find_by_id_for_expert(
        &self,
        id: Uuid,
        expert_id: Uuid,
    ) -> Result<Option<AvailabilitySlot>, DomainError>;

    /// All slots for an expert, ordered by (weekday asc, start time asc)
    async fn find_by_expert(&self, expert_id: Uuid)
        -> Result<Vec<AvailabilitySlot>, DomainError>;

    /// All slots for an expert on one weekday, ordered by start time asc
    async fn find_by_expert_and_weekday(
        &self,
        expert_id: Uuid,
        weekday: u8,
    ) -> Result<Vec<AvailabilitySlot>, DomainError>;

    /// Overwrite an existing slot
    async fn update(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError>;

    /// Hard-delete a slot owned by the given expert
    ///
    /// # Returns
    /// * `Ok(true)` - The slot existed, was owned by the expert, and is gone
    /// * `Ok(false)` - No matching row; nothing was deleted
    async fn delete_for_expert(&self, id: Uuid, expert_id: Uuid) -> Result<bool, DomainError>;
}
