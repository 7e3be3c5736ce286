use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use sb_api::app::create_app;
use sb_api::routes::AppState;
use sb_core::services::auth::AuthService;
use sb_core::services::availability::AvailabilityService;
use sb_core::services::booking::BookingService;
use sb_core::services::expert::ExpertService;
use sb_core::services::token::TokenService;
use sb_infra::database::{
    DatabasePool, MySqlAvailabilityRepository, MySqlBookingRepository, MySqlExpertRepository,
    MySqlUserRepository,
};
use sb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SlotBook API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    pool.health_check()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repo = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let expert_repo = Arc::new(MySqlExpertRepository::new(pool.get_pool().clone()));
    let availability_repo = Arc::new(MySqlAvailabilityRepository::new(pool.get_pool().clone()));
    let booking_repo = Arc::new(MySqlBookingRepository::new(pool.get_pool().clone()));

    let token_service = Arc::new(TokenService::new(config.jwt.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        token_service.clone(),
    ));
    let expert_service = Arc::new(ExpertService::new(user_repo.clone(), expert_repo.clone()));
    let availability_service = Arc::new(AvailabilityService::new(
        expert_repo.clone(),
        availability_repo.clone(),
        booking_repo.clone(),
    ));
    let booking_service = Arc::new(BookingService::new(
        expert_repo,
        availability_repo,
        booking_repo,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        expert_service,
        availability_service,
        booking_service,
        token_service,
    });

    info!("Server listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await
}
