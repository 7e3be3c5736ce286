//! Value objects derived from entities at query time

pub mod auth_response;
pub mod time_slot;

pub use auth_response::AuthResponse;
pub use time_slot::TimeSlot;
