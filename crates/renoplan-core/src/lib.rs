//! # Renoplan Core
//!
//! Core types and utilities shared by the renoplan crates:
//! unit conversion between pixels, millimeters and centimeters,
//! the workspace error type, and shared-state type aliases.

pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, Result};
pub use units::{clamp, Scale, DEFAULT_MM_PER_PX};
