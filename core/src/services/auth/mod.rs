//! Authentication service module
//!
//! Registration and login with bcrypt password hashing and JWT issuance.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
