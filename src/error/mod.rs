//! Error handling
//!
//! Defines error types for the upload vault.

pub mod types;

pub use types::*;
