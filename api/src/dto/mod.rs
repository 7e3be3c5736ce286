//! Request and response data transfer objects

pub mod auth;
pub mod availability;
pub mod booking;
pub mod expert;
