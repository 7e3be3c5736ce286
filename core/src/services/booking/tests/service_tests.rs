//! Unit tests for the booking service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::availability_slot::AvailabilitySlot;
use crate::domain::entities::booking::BookingStatus;
use crate::domain::entities::expert::Expert;
use crate::errors::{BookingError, DomainError};
use crate::repositories::availability::MockAvailabilityRepository;
use crate::repositories::booking::MockBookingRepository;
use crate::repositories::expert::MockExpertRepository;
use crate::services::booking::BookingService;

type TestService =
    BookingService<MockExpertRepository, MockAvailabilityRepository, MockBookingRepository>;

struct Fixture {
    service: TestService,
    bookings: Arc<MockBookingRepository>,
    expert_id: Uuid,
    slot_id: Uuid,
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

    let slot = AvailabilitySlot::new(expert_id, 1, "09:00".to_string(), "12:00".to_string());
    let slot_id = slot.id;
    availability.insert(slot).await;

    Fixture {
        service: BookingService::new(experts, availability, bookings.clone()),
        bookings,
        expert_id,
        slot_id,
    }
}

fn booking_error(err: DomainError) -> BookingError {
    match err {
        DomainError::Booking(e) => e,
        other => panic!("expected booking error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_booking_confirmed() {
    let f = fixture().await;
    let user_id = Uuid::new_v4();

    let booking = f
        .service
        .create_booking(user_id, f.expert_id, f.slot_id)
        .await
        .unwrap();

    assert_eq!(booking.user_id, user_id);
    assert_eq!(booking.expert_id, f.expert_id);
    assert_eq!(booking.slot_id, f.slot_id);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(f.bookings.len().await, 1);
}

#[tokio::test]
async fn test_create_booking_unknown_expert() {
    let f = fixture().await;

    let err = f
        .service
        .create_booking(Uuid::new_v4(), Uuid::new_v4(), f.slot_id)
        .await
        .unwrap_err();

    assert_eq!(booking_error(err), BookingError::ExpertNotFound);
    assert_eq!(f.bookings.len().await, 0);
}

#[tokio::test]
async fn test_create_booking_unknown_slot() {
    let f = fixture().await;

    let err = f
        .service
        .create_booking(Uuid::new_v4(), f.expert_id, Uuid::new_v4())
        .await
        .unwrap_err();

    assert_eq!(booking_error(err), BookingError::SlotNotFound);
}

#[tokio::test]
async fn test_create_booking_foreign_slot() {
    let f = fixture().await;

    // a second expert trying to be booked against the first one's slot
    let other = Expert::new(
        Uuid::new_v4(),
        "bio".to_string(),
        "tax".to_string(),
        60.0,
    );
    let other_id = other.id;
    // reuse the fixture repositories through a fresh service
    let experts = Arc::new(MockExpertRepository::new());
    experts.insert(other).await;
    let availability = Arc::new(MockAvailabilityRepository::new());
    let slot = AvailabilitySlot::new(f.expert_id, 1, "09:00".to_string(), "12:00".to_string());
    let slot_id = slot.id;
    availability.insert(slot).await;
    let service = BookingService::new(experts, availability, Arc::new(MockBookingRepository::new()));

    let err = service
        .create_booking(Uuid::new_v4(), other_id, slot_id)
        .await
        .unwrap_err();

    assert_eq!(booking_error(err), BookingError::SlotOwnershipMismatch);
}

#[tokio::test]
async fn test_create_booking_slot_already_taken() {
    let f = fixture().await;

    f.service
        .create_booking(Uuid::new_v4(), f.expert_id, f.slot_id)
        .await
        .unwrap();
    let err = f
        .service
        .create_booking(Uuid::new_v4(), f.expert_id, f.slot_id)
        .await
        .unwrap_err();

    assert_eq!(booking_error(err), BookingError::SlotAlreadyBooked);
    assert_eq!(f.bookings.len().await, 1);
}

#[tokio::test]
async fn test_create_booking_insert_failure_propagates() {
    let f = fixture().await;
    let experts = Arc::new(MockExpertRepository::new());
    let expert = Expert::new(Uuid::new_v4(), "bio".to_string(), "tax".to_string(), 60.0);
    let expert_id = expert.id;
    experts.insert(expert).await;
    let availability = Arc::new(MockAvailabilityRepository::new());
    let slot = AvailabilitySlot::new(expert_id, 1, "09:00".to_string(), "12:00".to_string());
    let slot_id = slot.id;
    availability.insert(slot).await;

    let service =
        BookingService::new(experts, availability, Arc::new(MockBookingRepository::failing()));

    let err = service
        .create_booking(Uuid::new_v4(), expert_id, slot_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
}

#[tokio::test]
async fn test_get_booking_scoped_to_owner() {
    let f = fixture().await;
    let user_id = Uuid::new_v4();

    let created = f
        .service
        .create_booking(user_id, f.expert_id, f.slot_id)
        .await
        .unwrap();

    let fetched = f.service.get_booking(created.id, user_id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.status, BookingStatus::Confirmed);

    // another user's lookup of the same id answers NotFound, same as a
    // lookup of an id that never existed
    let err = f
        .service
        .get_booking(created.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(booking_error(err), BookingError::BookingNotFound);

    let err = f.service.get_booking(Uuid::new_v4(), user_id).await.unwrap_err();
    assert_eq!(booking_error(err), BookingError::BookingNotFound);
}

#[tokio::test]
async fn test_list_bookings_for_user() {
    let f = fixture().await;
    let user_id = Uuid::new_v4();

    f.service
        .create_booking(user_id, f.expert_id, f.slot_id)
        .await
        .unwrap();

    let mine = f.service.list_bookings_for_user(user_id).await.unwrap();
    assert_eq!(mine.len(), 1);

    let theirs = f
        .service
        .list_bookings_for_user(Uuid::new_v4())
        .await
        .unwrap();
    assert!(theirs.is_empty());
}
