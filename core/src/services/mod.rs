//! Domain services

pub mod auth;
pub mod availability;
pub mod booking;
pub mod expert;
pub mod token;
