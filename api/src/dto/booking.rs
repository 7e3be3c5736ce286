//! Booking request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Request body for POST /api/v1/bookings
///
/// The booking user comes from the authenticated context, never from the
/// request body.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    /// Expert being booked
    pub expert_id: Uuid,

    /// Recurring slot being claimed
    pub slot_id: Uuid,
}
