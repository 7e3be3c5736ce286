//! HTTP API layer for the SlotBook backend.
//!
//! Exposes the REST surface over the domain services: registration and
//! login, expert discovery and profile management, recurring availability
//! management, slot listing, and booking creation.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
