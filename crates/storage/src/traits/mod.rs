//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend.

pub mod health;
pub mod interview;

pub use health::HealthCheck;
pub use interview::InterviewStore;
