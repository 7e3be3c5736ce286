//! Domain entities

pub mod availability_slot;
pub mod booking;
pub mod expert;
pub mod user;

pub use availability_slot::AvailabilitySlot;
pub use booking::{Booking, BookingStatus};
pub use expert::Expert;
pub use user::{User, UserRole};
