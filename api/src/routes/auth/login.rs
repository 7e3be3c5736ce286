use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates an account and returns a bearer token response. Unknown
/// email and wrong password both produce 401.
pub async fn login<U, E, A, B>(
    state: web::Data<AppState<U, E, A, B>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(ApiResponse::success(auth)),
        Err(err) => domain_error_response(&err),
    }
}
