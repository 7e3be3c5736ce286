//! Public expert discovery endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::expert::ExpertSearchQuery;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/experts
pub async fn list_experts<U, E, A, B>(state: web::Data<AppState<U, E, A, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.expert_service.list_experts().await {
        Ok(experts) => HttpResponse::Ok().json(ApiResponse::success(experts)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/experts/search?category=...
pub async fn search_experts<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    query: web::Query<ExpertSearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .expert_service
        .search_by_expertise(&query.category)
        .await
    {
        Ok(experts) => HttpResponse::Ok().json(ApiResponse::success(experts)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/experts/{id}
pub async fn get_expert<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.expert_service.get_expert(path.into_inner()).await {
        Ok(expert) => HttpResponse::Ok().json(ApiResponse::success(expert)),
        Err(err) => domain_error_response(&err),
    }
}
