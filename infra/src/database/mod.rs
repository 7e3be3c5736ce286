//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool and the repository implementations the
//! domain services are generic over.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{
    MySqlAvailabilityRepository, MySqlBookingRepository, MySqlExpertRepository,
    MySqlUserRepository,
};
