//! Booking service module
//!
//! Creation of confirmed bookings against recurring availability slots
//! and per-user booking history.

mod service;

#[cfg(test)]
mod tests;

pub use service::BookingService;
