//! MySQL repository implementations

mod availability_repository_impl;
mod booking_repository_impl;
mod expert_repository_impl;
mod user_repository_impl;

pub use availability_repository_impl::MySqlAvailabilityRepository;
pub use booking_repository_impl::MySqlBookingRepository;
pub use expert_repository_impl::MySqlExpertRepository;
pub use user_repository_impl::MySqlUserRepository;
