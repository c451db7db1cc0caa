//! Integration tests for homeserve-rs
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod catalog_tests;
pub mod config_validation_tests;
pub mod discovery_tests;
pub mod pricing_tests;
