//! Unit tests for the availability service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::availability_slot::AvailabilitySlot;
use crate::domain::entities::booking::Booking;
use crate::domain::entities::expert::Expert;
use crate::errors::{DomainError, ScheduleError};
use crate::repositories::availability::MockAvailabilityRepository;
use crate::repositories::booking::MockBookingRepository;
use crate::repositories::expert::MockExpertRepository;
use crate::services::availability::AvailabilityService;

type TestService = AvailabilityService<
    MockExpertRepository,
    MockAvailabilityRepository,
    MockBookingRepository,
>;

struct Fixture {
    service: TestService,
    availability: Arc<MockAvailabilityRepository>,
    bookings: Arc<MockBookingRepository>,
    expert_id: Uuid,
}

async fn fixture() -> Fixture {
    let experts = Arc::new(MockExpertRepository::new());
    let availability = Arc::new(MockAvailabilityRepository::new());
    let bookings = Arc::new(MockBookingRepository::new());

    let expert = Expert::new(
        Uuid::new_v4(),
        "bio".to_string(),
        "plumbing".to_string(),
        80.0,
    );
    let expert_id = expert.id;
    experts.insert(expert).await;

    Fixture {
        service: AvailabilityService::new(experts, availability.clone(), bookings.clone()),
        availability,
        bookings,
        expert_id,
    }
}

fn schedule_error(err: DomainError) -> ScheduleError {
    match err {
        DomainError::Schedule(e) => e,
        other => panic!("expected schedule error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_availability() {
    let f = fixture().await;

    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    assert_eq!(slot.expert_id, f.expert_id);
    assert_eq!(slot.weekday, 1);
    assert_eq!(slot.start_time, "09:00");
    assert_eq!(f.availability.len().await, 1);
}

#[tokio::test]
async fn test_create_rejects_bad_weekday() {
    let f = fixture().await;

    let err = f
        .service
        .create_availability(f.expert_id, 7, "09:00", "12:00")
        .await
        .unwrap_err();

    assert_eq!(schedule_error(err), ScheduleError::InvalidWeekday { value: 7 });
}

#[tokio::test]
async fn test_create_rejects_unknown_expert() {
    let f = fixture().await;

    let err = f
        .service
        .create_availability(Uuid::new_v4(), 1, "09:00", "12:00")
        .await
        .unwrap_err();

    assert_eq!(schedule_error(err), ScheduleError::ExpertNotFound);
}

#[tokio::test]
async fn test_create_rejects_bad_times() {
    let f = fixture().await;

    let err = f
        .service
        .create_availability(f.expert_id, 1, "9am", "12:00")
        .await
        .unwrap_err();
    assert_eq!(
        schedule_error(err),
        ScheduleError::InvalidTimeFormat {
            value: "9am".to_string()
        }
    );

    // end before start
    let err = f
        .service
        .create_availability(f.expert_id, 1, "12:00", "09:00")
        .await
        .unwrap_err();
    assert!(matches!(
        schedule_error(err),
        ScheduleError::InvalidTimeRange { .. }
    ));

    // zero-length window
    let err = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "09:00")
        .await
        .unwrap_err();
    assert!(matches!(
        schedule_error(err),
        ScheduleError::InvalidTimeRange { .. }
    ));
}

#[tokio::test]
async fn test_create_rejects_overlap_same_weekday() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    let err = f
        .service
        .create_availability(f.expert_id, 1, "11:00", "13:00")
        .await
        .unwrap_err();

    assert_eq!(schedule_error(err), ScheduleError::SlotOverlap);
    assert_eq!(f.availability.len().await, 1);
}

#[tokio::test]
async fn test_create_allows_touching_windows() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    // ends exactly where the other begins
    f.service
        .create_availability(f.expert_id, 1, "12:00", "14:00")
        .await
        .unwrap();

    assert_eq!(f.availability.len().await, 2);
}

#[tokio::test]
async fn test_create_allows_same_window_other_weekday() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    f.service
        .create_availability(f.expert_id, 2, "09:00", "12:00")
        .await
        .unwrap();

    assert_eq!(f.availability.len().await, 2);
}

#[tokio::test]
async fn test_update_availability() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    let updated = f
        .service
        .update_availability(slot.id, f.expert_id, 3, "10:00", "11:30")
        .await
        .unwrap();

    assert_eq!(updated.weekday, 3);
    assert_eq!(updated.start_time, "10:00");
    assert_eq!(updated.end_time, "11:30");
}

#[tokio::test]
async fn test_update_excludes_self_from_overlap_check() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    // shrinking inside its own window must not conflict with itself
    f.service
        .update_availability(slot.id, f.expert_id, 1, "09:30", "11:00")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_rejects_overlap_with_other_slot() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "14:00", "16:00")
        .await
        .unwrap();

    let err = f
        .service
        .update_availability(slot.id, f.expert_id, 1, "11:00", "15:00")
        .await
        .unwrap_err();

    assert_eq!(schedule_error(err), ScheduleError::SlotOverlap);
}

#[tokio::test]
async fn test_update_foreign_slot_reads_as_not_found() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    let err = f
        .service
        .update_availability(slot.id, Uuid::new_v4(), 1, "09:00", "12:00")
        .await
        .unwrap_err();

    assert_eq!(schedule_error(err), ScheduleError::SlotNotFound);
}

#[tokio::test]
async fn test_delete_availability() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "12:00")
        .await
        .unwrap();

    f.service
        .delete_availability(slot.id, f.expert_id)
        .await
        .unwrap();
    assert_eq!(f.availability.len().await, 0);

    let err = f
        .service
        .delete_availability(slot.id, f.expert_id)
        .await
        .unwrap_err();
    assert_eq!(schedule_error(err), ScheduleError::SlotNotFound);
}

#[tokio::test]
async fn test_list_availability_ordering() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 3, "09:00", "10:00")
        .await
        .unwrap();
    f.service
        .create_availability(f.expert_id, 1, "14:00", "15:00")
        .await
        .unwrap();
    f.service
        .create_availability(f.expert_id, 1, "09:00", "10:00")
        .await
        .unwrap();

    let slots = f.service.list_availability(f.expert_id).await.unwrap();

    let keys: Vec<_> = slots
        .iter()
        .map(|s| (s.weekday, s.start_time.clone()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (1, "09:00".to_string()),
            (1, "14:00".to_string()),
            (3, "09:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_get_available_slots_expands_half_hours() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "10:30")
        .await
        .unwrap();

    // 2025-08-04 is a Monday (weekday 1)
    let slots = f
        .service
        .get_available_slots(f.expert_id, "2025-08-04")
        .await
        .unwrap();

    let times: Vec<_> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "09:30", "10:00"]);
    assert!(slots.iter().all(|s| s.available));
}

#[tokio::test]
async fn test_get_available_slots_marks_booked_start() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "10:30")
        .await
        .unwrap();

    f.bookings
        .insert(Booking::confirmed(Uuid::new_v4(), f.expert_id, slot.id))
        .await;

    let slots = f
        .service
        .get_available_slots(f.expert_id, "2025-08-04")
        .await
        .unwrap();

    let by_time: Vec<_> = slots.iter().map(|s| (s.time.as_str(), s.available)).collect();
    assert_eq!(
        by_time,
        vec![("09:00", false), ("09:30", true), ("10:00", true)]
    );
}

#[tokio::test]
async fn test_get_available_slots_empty_weekday() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "10:00")
        .await
        .unwrap();

    // 2025-08-05 is a Tuesday; nothing is scheduled there
    let slots = f
        .service
        .get_available_slots(f.expert_id, "2025-08-05")
        .await
        .unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_get_available_slots_rejects_bad_date() {
    let f = fixture().await;

    let err = f
        .service
        .get_available_slots(f.expert_id, "04-08-2025")
        .await
        .unwrap_err();

    assert!(matches!(
        schedule_error(err),
        ScheduleError::InvalidDate { .. }
    ));
}

#[tokio::test]
async fn test_get_available_slots_skips_corrupt_slot() {
    let f = fixture().await;
    f.service
        .create_availability(f.expert_id, 1, "09:00", "10:00")
        .await
        .unwrap();

    // seeded directly, bypassing service validation
    f.availability
        .insert(AvailabilitySlot::new(
            f.expert_id,
            1,
            "garbage".to_string(),
            "10:00".to_string(),
        ))
        .await;

    let slots = f
        .service
        .get_available_slots(f.expert_id, "2025-08-04")
        .await
        .unwrap();

    let times: Vec<_> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "09:30"]);
}

#[tokio::test]
async fn test_booking_for_deleted_slot_is_ignored() {
    let f = fixture().await;
    let slot = f
        .service
        .create_availability(f.expert_id, 1, "09:00", "10:00")
        .await
        .unwrap();

    f.bookings
        .insert(Booking::confirmed(Uuid::new_v4(), f.expert_id, Uuid::new_v4()))
        .await;
    let _ = slot;

    let slots = f
        .service
        .get_available_slots(f.expert_id, "2025-08-04")
        .await
        .unwrap();
    assert!(slots.iter().all(|s| s.available));
}
