//! Repository traits abstracting the persistence layer.
//!
//! Each entity gets a trait describing its data access contract plus an
//! in-memory mock used by service tests. Concrete MySQL implementations
//! live in the `sb_infra` crate.

pub mod availability;
pub mod booking;
pub mod expert;
pub mod user;

pub use availability::AvailabilityRepository;
pub use booking::BookingRepository;
pub use expert::ExpertRepository;
pub use user::UserRepository;
