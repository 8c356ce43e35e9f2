//! Core types for interview-ingest.
//!
//! Domain model, webhook authentication and validation, and the pure
//! analytics shared by the service and HTTP crates.

pub mod analytics;
mod completion_status;
pub mod constants;
mod env_config;
mod error;
mod interview;
mod variables;
pub mod webhook;

pub use completion_status::*;
pub use env_config::*;
pub use error::*;
pub use interview::*;
pub use variables::*;
