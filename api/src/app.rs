//! Application factory
//!
//! Builds the Actix-web application over a prepared [`AppState`]. Kept
//! generic over the repository implementations so integration tests can
//! run the full HTTP stack against in-memory mocks.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, availability, bookings, experts, AppState};

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_shared::errors::{error_codes, ErrorResponse};
use sb_shared::types::response::{HealthResponse, HealthStatus};

/// Create and configure the application with all dependencies
pub fn create_app<U, E, A, B>(
    app_state: web::Data<AppState<U, E, A, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    E: ExpertRepository + 'static,
    A: AvailabilityRepository + 'static,
    B: BookingRepository + 'static,
{
    let cors = create_cors();
    let jwt = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<U, E, A, B>))
                        .route("/login", web::post().to(auth::login::login::<U, E, A, B>)),
                )
                .service(
                    web::scope("/experts")
                        // literal segments before the {id} matcher
                        .route(
                            "/search",
                            web::get().to(experts::discovery::search_experts::<U, E, A, B>),
                        )
                        .service(
                            web::resource("/profile")
                                .wrap(jwt.clone())
                                .route(web::post().to(experts::profile::create_profile::<U, E, A, B>))
                                .route(web::get().to(experts::profile::get_my_profile::<U, E, A, B>))
                                .route(web::patch().to(experts::profile::update_profile::<U, E, A, B>)),
                        )
                        .route(
                            "/{id}/availability",
                            web::get().to(experts::slots::list_expert_availability::<U, E, A, B>),
                        )
                        .route(
                            "/{id}/slots",
                            web::get().to(experts::slots::get_expert_slots::<U, E, A, B>),
                        )
                        .route("/{id}", web::get().to(experts::discovery::get_expert::<U, E, A, B>))
                        .route("", web::get().to(experts::discovery::list_experts::<U, E, A, B>)),
                )
                .service(
                    web::scope("/availability")
                        .wrap(jwt.clone())
                        .route("", web::post().to(availability::manage::create_slot::<U, E, A, B>))
                        .route(
                            "/{id}",
                            web::patch().to(availability::manage::update_slot::<U, E, A, B>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(availability::manage::delete_slot::<U, E, A, B>),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .wrap(jwt)
                        .route("", web::post().to(bookings::manage::create_booking::<U, E, A, B>))
                        .route("", web::get().to(bookings::manage::list_my_bookings::<U, E, A, B>))
                        .route(
                            "/{id}",
                            web::get().to(bookings::manage::get_my_booking::<U, E, A, B>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Default handler for unmatched routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource does not exist",
    ))
}
