//! Recurring weekly availability slot entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ScheduleError;
use crate::scheduling::overlap::TimeRange;
use crate::scheduling::time_grid::parse_clock_time;

/// A weekly-recurring window during which an expert can be booked.
///
/// The window is anchored to a weekday (0 = Sunday .. 6 = Saturday) and two
/// same-day wall-clock times in "HH:MM" form with start strictly before end.
/// Times are provider-local; no timezone handling is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Unique identifier for the slot
    pub id: Uuid,

    /// Owning expert
    pub expert_id: Uuid,

    /// Day of week, 0 (Sunday) through 6 (Saturday)
    pub weekday: u8,

    /// Start of the window, "HH:MM"
    pub start_time: String,

    /// End of the window, "HH:MM"
    pub end_time: String,

    /// Timestamp when the slot was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the slot was last updated
    pub updated_at: DateTime<Utc>,
}

impl AvailabilitySlot {
    /// Creates a new recurring slot
    pub fn new(expert_id: Uuid, weekday: u8, start_time: String, end_time: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            expert_id,
            weekday,
            start_time,
            end_time,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the slot to a new weekday and window
    pub fn reschedule(&mut self, weekday: u8, start_time: String, end_time: String) {
        self.weekday = weekday;
        self.start_time = start_time;
        self.end_time = end_time;
        self.updated_at = Utc::now();
    }

    /// Parses the stored wall-clock strings into a comparable range
    pub fn time_range(&self) -> Result<TimeRange, ScheduleError> {
        let start = parse_clock_time(&self.start_time)?;
        let end = parse_clock_time(&self.end_time)?;
        Ok(TimeRange::new(start, end))
    }
}
