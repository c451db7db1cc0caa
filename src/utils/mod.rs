//! Utility modules for homeserve
//!
//! - **error**: crate error type and result alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{HomeserveError, Result};
