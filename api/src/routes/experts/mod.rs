//! Expert routes: discovery, profile management, and slot listing

pub mod discovery;
pub mod profile;
pub mod slots;
