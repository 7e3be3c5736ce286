//! Booking endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::CreateBookingRequest;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/bookings
///
/// Books a recurring slot for the authenticated user. The booking is
/// created already confirmed; a second active claim on the same slot
/// returns 409.
pub async fn create_booking<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .create_booking(auth.user_id, request.expert_id, request.slot_id)
        .await
    {
        Ok(booking) => HttpResponse::Created().json(ApiResponse::success(booking)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/bookings/{id}
///
/// Fetches one of the caller's bookings. A booking made by another user
/// answers 404, same as a missing one.
pub async fn get_my_booking<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .get_booking(path.into_inner(), auth.user_id)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(booking)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/bookings
///
/// Lists the caller's bookings, newest first.
pub async fn list_my_bookings<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .list_bookings_for_user(auth.user_id)
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::success(bookings)),
        Err(err) => domain_error_response(&err),
    }
}
