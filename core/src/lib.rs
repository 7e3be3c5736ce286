//! Core business logic and domain layer for the SlotBook backend.
//!
//! This crate contains the availability and booking engine together with the
//! domain entities, repository abstractions and services it is built from.
//! Persistence and transport concerns live in the `sb_infra` and `sb_api`
//! crates; everything here is storage- and transport-agnostic.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod scheduling;
pub mod services;
