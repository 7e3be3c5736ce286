//! Booking creation and listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{BookingError, DomainResult};
use crate::repositories::{AvailabilityRepository, BookingRepository, ExpertRepository};

/// Service creating and listing bookings
pub struct BookingService<E, A, B>
where
    E: ExpertRepository,
    A: AvailabilityRepository,
    B: BookingRepository,
{
    expert_repository: Arc<E>,
    availability_repository: Arc<A>,
    booking_repository: Arc<B>,
}

impl<E, A, B> BookingService<E, A, B>
where
    E: ExpertRepository,
    A: AvailabilityRepository,
    B: BookingRepository,
{
    /// Create a new booking service
    pub fn new(
        expert_repository: Arc<E>,
        availability_repository: Arc<A>,
        booking_repository: Arc<B>,
    ) -> Self {
        Self {
            expert_repository,
            availability_repository,
            booking_repository,
        }
    }

    /// Book a recurring slot with an expert on behalf of a user.
    ///
    /// Validation order: the expert must exist, the slot must exist, and
    /// the slot must belong to that expert. The insert itself enforces the
    /// one-active-booking-per-slot invariant; a concurrent claim on the
    /// same slot surfaces as `BookingError::SlotAlreadyBooked` from the
    /// repository rather than from a pre-check that could race.
    ///
    /// Bookings are created already confirmed.
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        expert_id: Uuid,
        slot_id: Uuid,
    ) -> DomainResult<Booking> {
        if self.expert_repository.find_by_id(expert_id).await?.is_none() {
            return Err(BookingError::ExpertNotFound.into());
        }

        let slot = self
            .availability_repository
            .find_by_id(slot_id)
            .await?
            .ok_or(BookingError::SlotNotFound)?;
        if slot.expert_id != expert_id {
            return Err(BookingError::SlotOwnershipMismatch.into());
        }

        let booking = Booking::confirmed(user_id, expert_id, slot_id);
        let created = self.booking_repository.create(booking).await?;

        info!(
            booking_id = %created.id,
            user_id = %user_id,
            expert_id = %expert_id,
            slot_id = %slot_id,
            "created booking"
        );
        Ok(created)
    }

    /// Fetch one of the user's bookings by id.
    ///
    /// A booking that does not exist and a booking made by someone else
    /// both answer `BookingNotFound`; callers cannot probe foreign ids.
    pub async fn get_booking(&self, booking_id: Uuid, user_id: Uuid) -> DomainResult<Booking> {
        match self.booking_repository.find_by_id(booking_id).await? {
            Some(booking) if booking.user_id == user_id => Ok(booking),
            _ => Err(BookingError::BookingNotFound.into()),
        }
    }

    /// All bookings made by a user, newest first
    pub async fn list_bookings_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.booking_repository.find_by_user(user_id).await
    }
}
