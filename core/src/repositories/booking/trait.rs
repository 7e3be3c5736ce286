//! Booking repository trait with transactional creation semantics.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

/// Repository trait for Booking persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a booking inside a scoped transaction.
    ///
    /// The write is all-or-nothing: either the row is committed and visible
    /// to subsequent reads, or nothing is persisted. At most one active
    /// (non-cancelled) booking may exist per (expert, slot) pair; a second
    /// insert fails with `BookingError::SlotAlreadyBooked` and leaves no row
    /// behind.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The committed booking
    /// * `Err(DomainError)` - Insert failed; the transaction was rolled back
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// All non-cancelled bookings for an expert, across every date
    async fn find_active_by_expert(&self, expert_id: Uuid)
        -> Result<Vec<Booking>, DomainError>;

    /// All bookings made by a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError>;
}
