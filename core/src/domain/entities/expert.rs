//! Expert entity representing a provider profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expert profile owned by exactly one user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    /// Unique identifier for the expert
    pub id: Uuid,

    /// Owning user account, unique per expert
    pub user_id: Uuid,

    /// Short biography shown to clients
    pub bio: String,

    /// Area of expertise used for search
    pub expertise: String,

    /// Hourly rate in the platform currency
    pub hourly_rate: f64,

    /// Whether the profile passed platform verification
    pub is_verified: bool,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Expert {
    /// Creates a new, unverified expert profile
    pub fn new(user_id: Uuid, bio: String, expertise: String, hourly_rate: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            bio,
            expertise,
            hourly_rate,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial profile update; `None` fields keep their value
    pub fn apply_update(
        &mut self,
        bio: Option<String>,
        expertise: Option<String>,
        hourly_rate: Option<f64>,
    ) {
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(expertise) = expertise {
            self.expertise = expertise;
        }
        if let Some(rate) = hourly_rate {
            self.hourly_rate = rate;
        }
        self.updated_at = Utc::now();
    }
}
