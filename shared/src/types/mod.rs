//! Type definitions shared across server crates

pub mod response;

// Re-export commonly used types at module level
pub use response::{ApiResponse, HealthResponse, HealthStatus};
