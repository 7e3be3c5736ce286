//! Derived bookable time point.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A discrete bookable time point generated by cutting a recurring
/// availability slot into fixed 30-minute intervals for a query date.
///
/// Time slots are never persisted; they are recomputed on every query and
/// carry the id of the recurring slot they were expanded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Wall-clock time of the point, "HH:MM"
    pub time: String,

    /// Whether the point is free of active bookings
    pub available: bool,

    /// The recurring slot this point was expanded from
    pub slot_id: Uuid,
}

impl TimeSlot {
    pub fn new(time: String, available: bool, slot_id: Uuid) -> Self {
        Self {
            time,
            available,
            slot_id,
        }
    }
}
