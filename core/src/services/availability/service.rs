//! Recurring availability management and slot expansion.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::availability_slot::AvailabilitySlot;
use crate::domain::value_objects::TimeSlot;
use crate::errors::{DomainResult, ScheduleError};
use crate::repositories::{AvailabilityRepository, BookingRepository, ExpertRepository};
use crate::scheduling::overlap::{overlaps, TimeRange};
use crate::scheduling::time_grid::{
    format_clock_time, parse_clock_time, weekday_of, TimeGrid, SLOT_STEP_MINUTES,
};

const MAX_WEEKDAY: u8 = 6;

/// Service managing recurring weekly availability windows
pub struct AvailabilityService<E, A, B>
where
    E: ExpertRepository,
    A: AvailabilityRepository,
    B: BookingRepository,
{
    expert_repository: Arc<E>,
    availability_repository: Arc<A>,
    booking_repository: Arc<B>,
}

impl<E, A, B> AvailabilityService<E, A, B>
where
    E: ExpertRepository,
    A: AvailabilityRepository,
    B: BookingRepository,
{
    /// Create a new availability service
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

    /// Validate a candidate window and return its parsed range.
    ///
    /// Start must be strictly before end; the overlap invariant for the
    /// whole weekday is checked separately against stored slots.
    fn validate_window(
        weekday: u8,
        start_time: &str,
        end_time: &str,
    ) -> Result<TimeRange, ScheduleError> {
        if weekday > MAX_WEEKDAY {
            return Err(ScheduleError::InvalidWeekday { value: weekday });
        }

        let start = parse_clock_time(start_time)?;
        let end = parse_clock_time(end_time)?;
        if start >= end {
            return Err(ScheduleError::InvalidTimeRange {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        Ok(TimeRange::new(start, end))
    }

    /// True when the candidate range overlaps any of the given slots.
    ///
    /// Stored slots that fail to parse are treated as non-conflicting; the
    /// listing path skips them the same way.
    fn conflicts_with(candidate: &TimeRange, existing: &[AvailabilitySlot]) -> bool {
        existing.iter().any(|slot| match slot.time_range() {
            Ok(range) => overlaps(candidate, &range),
            Err(_) => false,
        })
    }

    /// Create a recurring weekly slot for an expert.
    ///
    /// # Errors
    /// * `ScheduleError::InvalidWeekday` - weekday outside 0..=6
    /// * `ScheduleError::ExpertNotFound` - no such expert
    /// * `ScheduleError::InvalidTimeFormat` / `InvalidTimeRange` - bad window
    /// * `ScheduleError::SlotOverlap` - window intersects an existing slot
    ///   on the same weekday (touching endpoints are allowed)
    pub async fn create_availability(
        &self,
        expert_id: Uuid,
        weekday: u8,
        start_time: &str,
        end_time: &str,
    ) -> DomainResult<AvailabilitySlot> {
        let candidate = Self::validate_window(weekday, start_time, end_time)?;

        if self.expert_repository.find_by_id(expert_id).await?.is_none() {
            return Err(ScheduleError::ExpertNotFound.into());
        }

        let existing = self
            .availability_repository
            .find_by_expert_and_weekday(expert_id, weekday)
            .await?;
        if Self::conflicts_with(&candidate, &existing) {
            return Err(ScheduleError::SlotOverlap.into());
        }

        let slot = AvailabilitySlot::new(
            expert_id,
            weekday,
            start_time.to_string(),
            end_time.to_string(),
        );
        let created = self.availability_repository.create(slot).await?;

        info!(slot_id = %created.id, expert_id = %expert_id, weekday, "created availability slot");
        Ok(created)
    }

    /// Move an existing slot to a new weekday and window.
    ///
    /// The slot must be owned by `expert_id`; the overlap check excludes
    /// the slot itself so an unchanged window always revalidates cleanly.
    pub async fn update_availability(
        &self,
        slot_id: Uuid,
        expert_id: Uuid,
        weekday: u8,
        start_time: &str,
        end_time: &str,
    ) -> DomainResult<AvailabilitySlot> {
        let candidate = Self::validate_window(weekday, start_time, end_time)?;

        let mut slot = self
            .availability_repository
            .find_by_id_for_expert(slot_id, expert_id)
            .await?
            .ok_or(ScheduleError::SlotNotFound)?;

        let others: Vec<_> = self
            .availability_repository
            .find_by_expert_and_weekday(expert_id, weekday)
            .await?
            .into_iter()
            .filter(|s| s.id != slot_id)
            .collect();
        if Self::conflicts_with(&candidate, &others) {
            return Err(ScheduleError::SlotOverlap.into());
        }

        slot.reschedule(weekday, start_time.to_string(), end_time.to_string());
        self.availability_repository.update(slot).await
    }

    /// Hard-delete a slot owned by the given expert.
    ///
    /// Not-found and not-owned are deliberately the same outcome, so a
    /// caller cannot learn whether a foreign slot id exists.
    pub async fn delete_availability(&self, slot_id: Uuid, expert_id: Uuid) -> DomainResult<()> {
        let deleted = self
            .availability_repository
            .delete_for_expert(slot_id, expert_id)
            .await?;
        if !deleted {
            return Err(ScheduleError::SlotNotFound.into());
        }

        info!(slot_id = %slot_id, expert_id = %expert_id, "deleted availability slot");
        Ok(())
    }

    /// All recurring slots for an expert in display order
    /// (weekday ascending, start time ascending).
    pub async fn list_availability(&self, expert_id: Uuid) -> DomainResult<Vec<AvailabilitySlot>> {
        self.availability_repository.find_by_expert(expert_id).await
    }

    /// Expand an expert's recurring slots into discrete bookable time
    /// points for one calendar date.
    ///
    /// Each slot on the date's weekday is cut into 30-minute points; a
    /// point is unavailable when an active booking references a slot whose
    /// declared start time equals that point. The booked-time lookup keys
    /// on the recurring slot's start time, so a booking claims that time
    /// on every future occurrence of the weekday.
    ///
    /// Slots with corrupt stored times are skipped rather than failing the
    /// whole listing. An expert with no slots on that weekday yields an
    /// empty list, not an error.
    pub async fn get_available_slots(
        &self,
        expert_id: Uuid,
        date: &str,
    ) -> DomainResult<Vec<TimeSlot>> {
        let weekday = weekday_of(date)?;

        let slots = self
            .availability_repository
            .find_by_expert_and_weekday(expert_id, weekday)
            .await?;
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let booked_times = self.booked_start_times(expert_id).await?;

        let mut time_slots = Vec::new();
        for slot in &slots {
            let range = match slot.time_range() {
                Ok(range) => range,
                Err(_) => {
                    warn!(slot_id = %slot.id, "skipping slot with corrupt stored times");
                    continue;
                }
            };

            for point in TimeGrid::new(range.start, range.end, SLOT_STEP_MINUTES) {
                let time = format_clock_time(point);
                let available = !booked_times.contains(&time);
                time_slots.push(TimeSlot::new(time, available, slot.id));
            }
        }

        Ok(time_slots)
    }

    /// Start times claimed by the expert's active bookings.
    ///
    /// Bookings whose slot has since been hard-deleted resolve to nothing
    /// and are ignored.
    async fn booked_start_times(&self, expert_id: Uuid) -> DomainResult<HashSet<String>> {
        let bookings = self
            .booking_repository
            .find_active_by_expert(expert_id)
            .await?;

        let mut booked = HashSet::new();
        for booking in bookings {
            if let Some(slot) = self
                .availability_repository
                .find_by_id(booking.slot_id)
                .await?
            {
                booked.insert(slot.start_time);
            }
        }
        Ok(booked)
    }
}
