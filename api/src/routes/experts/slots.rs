//! Public endpoints exposing an expert's schedule.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::availability::SlotsQuery;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/experts/{id}/availability
///
/// Lists the expert's recurring weekly windows in display order.
pub async fn list_expert_availability<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .availability_service
        .list_availability(path.into_inner())
        .await
    {
        Ok(slots) => HttpResponse::Ok().json(ApiResponse::success(slots)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/experts/{id}/slots?date=YYYY-MM-DD
///
/// Expands the expert's recurring windows on the date's weekday into
/// 30-minute bookable points, flagging those already claimed.
pub async fn get_expert_slots<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    path: web::Path<Uuid>,
    query: web::Query<SlotsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .availability_service
        .get_available_slots(path.into_inner(), &query.date)
        .await
    {
        Ok(slots) => HttpResponse::Ok().json(ApiResponse::success(slots)),
        Err(err) => domain_error_response(&err),
    }
}
