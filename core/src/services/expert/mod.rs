//! Expert profile service module

mod service;

#[cfg(test)]
mod tests;

pub use service::ExpertService;
