//! JWT access token issuance and verification

mod service;

pub use service::{Claims, TokenService};
