//! Availability request DTOs
//!
//! Weekday bounds are checked here for an early 400; time strings are
//! validated by the scheduling service, which owns the format rules.

use serde::Deserialize;
use validator::Validate;

/// Request body for POST /api/v1/availability and PATCH /api/v1/availability/{id}
#[derive(Debug, Deserialize, Validate)]
pub struct AvailabilitySlotRequest {
    /// Day of week, 0 (Sunday) through 6 (Saturday)
    #[validate(range(max = 6, message = "Weekday must be between 0 and 6"))]
    pub weekday: u8,

    /// Window start, "HH:MM"
    #[validate(length(min = 1, message = "Start time must not be empty"))]
    pub start_time: String,

    /// Window end, "HH:MM"
    #[validate(length(min = 1, message = "End time must not be empty"))]
    pub end_time: String,
}

/// Query parameters for GET /api/v1/experts/{id}/slots
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
}
