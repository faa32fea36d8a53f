//! Core traits shared by band storage and the dense reference type.

pub mod traits;
pub use traits::{MatShape, MatrixGet, ToDense};
