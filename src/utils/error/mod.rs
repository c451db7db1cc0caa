//! Error handling for homeserve
//!
//! The booking core itself never fails; errors only surface while loading
//! configuration and catalog data or while building validated inputs.

mod helpers;
mod types;

pub use types::{HomeserveError, Result};
