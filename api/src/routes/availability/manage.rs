//! Availability management endpoints for experts.
//!
//! The owning expert is always resolved from the authenticated account's
//! profile, so a caller can only touch their own schedule regardless of
//! the ids they send.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::availability::AvailabilitySlotRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/availability
///
/// Creates a recurring weekly slot for the caller's expert profile.
/// Returns 409 when the window overlaps an existing slot on the same
/// weekday.
pub async fn create_slot<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    request: web::Json<AvailabilitySlotRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let expert = match state.expert_service.get_profile_by_user(auth.user_id).await {
        Ok(expert) => expert,
        Err(err) => return domain_error_response(&err),
    };

    match state
        .availability_service
        .create_availability(
            expert.id,
            request.weekday,
            &request.start_time,
            &request.end_time,
        )
        .await
    {
        Ok(slot) => HttpResponse::Created().json(ApiResponse::success(slot)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for PATCH /api/v1/availability/{id}
pub async fn update_slot<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<AvailabilitySlotRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let expert = match state.expert_service.get_profile_by_user(auth.user_id).await {
        Ok(expert) => expert,
        Err(err) => return domain_error_response(&err),
    };

    match state
        .availability_service
        .update_availability(
            path.into_inner(),
            expert.id,
            request.weekday,
            &request.start_time,
            &request.end_time,
        )
        .await
    {
        Ok(slot) => HttpResponse::Ok().json(ApiResponse::success(slot)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for DELETE /api/v1/availability/{id}
///
/// Returns 404 both for unknown slot ids and for slots owned by a
/// different expert.
pub async fn delete_slot<U, E, A, B>(
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
    let expert = match state.expert_service.get_profile_by_user(auth.user_id).await {
        Ok(expert) => expert,
        Err(err) => return domain_error_response(&err),
    };

    match state
        .availability_service
        .delete_availability(path.into_inner(), expert.id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => domain_error_response(&err),
    }
}
