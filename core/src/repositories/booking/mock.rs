//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{BookingError, DomainError};

use super::trait_::BookingRepository;

/// Mock booking repository for testing
///
/// Enforces the same active-(expert, slot) uniqueness the MySQL schema
/// enforces with its unique index.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
    fail_on_create: bool,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            fail_on_create: false,
        }
    }

    /// Create a mock whose `create` always fails with an internal error
    pub fn failing() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            fail_on_create: true,
        }
    }

    /// Seed the repository with an existing booking
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }

    /// Number of stored bookings
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        if self.fail_on_create {
            return Err(DomainError::Internal {
                message: "Simulated insert failure".to_string(),
            });
        }

        let mut bookings = self.bookings.write().await;

        let duplicate = bookings.values().any(|b| {
            b.expert_id == booking.expert_id
                && b.slot_id == booking.slot_id
                && b.status.is_active()
        });
        if duplicate {
            return Err(BookingError::SlotAlreadyBooked.into());
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_active_by_expert(
        &self,
        expert_id: Uuid,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.expert_id == expert_id && b.status.is_active())
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut result: Vec<_> = bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }
}
