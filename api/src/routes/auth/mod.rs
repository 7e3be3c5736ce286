//! Authentication routes: registration and login

pub mod login;
pub mod register;
