//! Matrix module: band storage, strided views and dense-reference helpers.

pub mod band;
pub use band::BandMatrix;
pub mod dense;
pub use dense::{DenseReference, approx_eq};
pub mod tridiagonal;
pub use tridiagonal::TridiagonalMatrix;
pub mod view;
pub use view::{BandView, BandViewMut};
