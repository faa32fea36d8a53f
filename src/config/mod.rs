//! Storage options for band matrices.

pub mod options;
pub use options::BandOptions;
