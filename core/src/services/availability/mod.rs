//! Availability service module
//!
//! Recurring weekly slot management with overlap enforcement, plus the
//! expansion of recurring slots into discrete bookable time points.

mod service;

#[cfg(test)]
mod tests;

pub use service::AvailabilityService;
