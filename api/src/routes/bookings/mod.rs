//! Authenticated booking routes

pub mod manage;
