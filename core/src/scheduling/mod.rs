//! Scheduling primitives for the availability engine.
//!
//! This module holds the pure building blocks the availability and booking
//! services are assembled from: wall-clock parsing, weekday derivation,
//! fixed-step expansion of a window into discrete time points, and interval
//! overlap detection. Nothing here touches a repository.

pub mod overlap;
pub mod time_grid;

pub use overlap::{overlaps, TimeRange};
pub use time_grid::{format_clock_time, parse_clock_time, weekday_of, TimeGrid, SLOT_STEP_MINUTES};
