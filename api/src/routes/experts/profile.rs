//! Authenticated expert profile endpoints.
//!
//! The profile is always resolved from the authenticated account; a
//! caller can only ever read or write their own profile here.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::expert::{CreateExpertProfileRequest, UpdateExpertProfileRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/experts/profile
///
/// Creates an expert profile for the caller and promotes their account to
/// the expert role in the same transaction. Returns 409 when the caller
/// already owns a profile.
pub async fn create_profile<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    request: web::Json<CreateExpertProfileRequest>,
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

    let request = request.into_inner();
    match state
        .expert_service
        .create_profile(
            auth.user_id,
            request.bio,
            request.expertise,
            request.hourly_rate,
        )
        .await
    {
        Ok(expert) => HttpResponse::Created().json(ApiResponse::success(expert)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/experts/profile
pub async fn get_my_profile<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.expert_service.get_profile_by_user(auth.user_id).await {
        Ok(expert) => HttpResponse::Ok().json(ApiResponse::success(expert)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for PATCH /api/v1/experts/profile
pub async fn update_profile<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    auth: AuthContext,
    request: web::Json<UpdateExpertProfileRequest>,
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

    let request = request.into_inner();
    match state
        .expert_service
        .update_profile(
            auth.user_id,
            request.bio,
            request.expertise,
            request.hourly_rate,
        )
        .await
    {
        Ok(expert) => HttpResponse::Ok().json(ApiResponse::success(expert)),
        Err(err) => domain_error_response(&err),
    }
}
