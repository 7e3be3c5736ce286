//! Route handlers grouped by resource

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod experts;

use std::sync::Arc;

use sb_core::repositories::{
    AvailabilityRepository, BookingRepository, ExpertRepository, UserRepository,
};
use sb_core::services::auth::AuthService;
use sb_core::services::availability::AvailabilityService;
use sb_core::services::booking::BookingService;
use sb_core::services::expert::ExpertService;
use sb_core::services::token::TokenService;

/// Application state holding the shared domain services.
///
/// Generic over the repository implementations so tests can wire the
/// in-memory mocks through the same code paths production uses.
pub struct AppState<U, E, A, B>
where
    U: UserRepository,
    E: ExpertRepository,
    A: AvailabilityRepository,
    B: BookingRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub expert_service: Arc<ExpertService<U, E>>,
    pub availability_service: Arc<AvailabilityService<E, A, B>>,
    pub booking_service: Arc<BookingService<E, A, B>>,
    pub token_service: Arc<TokenService>,
}
