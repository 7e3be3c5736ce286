//! Domain-specific error types for authentication, scheduling and booking.
//!
//! Every error carries a stable, human-readable message; the presentation
//! layer maps each variant onto a transport-level status and error code.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Errors raised while validating or expanding availability
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid time format: {value} (expected HH:MM)")]
    InvalidTimeFormat { value: String },

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {value}")]
    InvalidWeekday { value: u8 },

    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Availability slot overlaps with an existing slot")]
    SlotOverlap,

    #[error("Availability slot not found")]
    SlotNotFound,

    #[error("Expert not found")]
    ExpertNotFound,
}

/// Errors raised while managing expert profiles
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpertError {
    #[error("Expert profile not found")]
    ExpertNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Expert profile already exists for this user")]
    ProfileAlreadyExists,
}

/// Errors raised while creating bookings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Expert not found")]
    ExpertNotFound,

    #[error("Availability slot not found")]
    SlotNotFound,

    #[error("Slot does not belong to the specified expert")]
    SlotOwnershipMismatch,

    #[error("Slot already has an active booking")]
    SlotAlreadyBooked,

    #[error("Booking not found")]
    BookingNotFound,
}
