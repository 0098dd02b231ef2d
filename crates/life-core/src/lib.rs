//! Core types and utilities for the toroidal Game of Life engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::{Error, Result};
pub use types::*;
