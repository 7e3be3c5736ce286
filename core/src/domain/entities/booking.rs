//! Booking entity representing a confirmed claim on a recurring slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Stable string form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Parse the persisted string form back into a status
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// A booking counts against availability unless it was cancelled
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// A user's claim on a recurring availability slot.
///
/// Invariant: `slot_id` must reference a slot owned by `expert_id`; the
/// booking service rejects mismatches before any write happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// The booking user
    pub user_id: Uuid,

    /// The booked expert
    pub expert_id: Uuid,

    /// The recurring slot being claimed
    pub slot_id: Uuid,

    /// Current lifecycle status
    pub status: BookingStatus,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the booking was last updated
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a booking in the `Confirmed` state.
    ///
    /// Bookings are auto-confirmed; there is no pending-approval workflow.
    pub fn confirmed(user_id: Uuid, expert_id: Uuid, slot_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            expert_id,
            slot_id,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }
}
