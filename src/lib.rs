//! bandmat: compact banded-matrix storage over Faer
//!
//! This crate stores matrices whose nonzeros are confined to a band of diagonals
//! `[-subs, supers]`, exposes each diagonal and each column as a strided in-place view,
//! and materializes the band into a dense `faer::Mat` for use with general dense code.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
