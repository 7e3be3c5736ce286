//! Expert profile request DTOs

use serde::Deserialize;
use validator::Validate;

/// Request body for POST /api/v1/experts/profile
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpertProfileRequest {
    /// Short biography shown to clients
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: String,

    /// Expertise category used for search
    #[validate(length(min = 1, max = 255, message = "Expertise must be 1-255 characters"))]
    pub expertise: String,

    /// Hourly rate; must be a positive number
    pub hourly_rate: f64,
}

/// Request body for PATCH /api/v1/experts/profile
///
/// Absent fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpertProfileRequest {
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Expertise must be 1-255 characters"))]
    pub expertise: Option<String>,

    pub hourly_rate: Option<f64>,
}

/// Query parameters for GET /api/v1/experts/search
#[derive(Debug, Deserialize)]
pub struct ExpertSearchQuery {
    /// Expertise category to match exactly
    pub category: String,
}
