use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account with the `user` role. Returns 201 with the
/// created account, 400 on validation failure, or 409 when the email is
/// already registered.
pub async fn register<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    request: web::Json<RegisterRequest>,
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

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(ApiResponse::success(user)),
        Err(err) => domain_error_response(&err),
    }
}
