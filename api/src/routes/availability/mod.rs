//! Authenticated availability management routes

pub mod manage;
