//! Tridiagonal matrices as a band-storage specialization.
//!
//! A general tridiagonal matrix stores one super- and one sub-diagonal. The self-adjoint
//! form stores the sub-diagonal only and reads the super-diagonal as its mirror.

use crate::config::BandOptions;
use crate::error::BandError;
use crate::matrix::band::BandMatrix;
use crate::matrix::view::{BandView, BandViewMut};
use faer::Mat;
use num_traits::Zero;

/// Square `size x size` tridiagonal matrix. Requires `size >= 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalMatrix<T> {
    band: BandMatrix<T>,
}

impl<T: Copy + Zero> TridiagonalMatrix<T> {
    pub fn new(size: usize) -> Result<Self, BandError> {
        Self::with_options(size, BandOptions::empty())
    }

    /// Symmetric tridiagonal storage: main diagonal plus one sub-diagonal.
    pub fn self_adjoint(size: usize) -> Result<Self, BandError> {
        Self::with_options(size, BandOptions::SELF_ADJOINT)
    }

    pub fn with_options(size: usize, options: BandOptions) -> Result<Self, BandError> {
        let supers = if options.is_self_adjoint() { 0 } else { 1 };
        let band = BandMatrix::with_options(size, size, supers, 1, options)?;
        Ok(Self { band })
    }

    pub fn size(&self) -> usize {
        self.band.rows()
    }

    pub fn is_self_adjoint(&self) -> bool {
        self.band.options().is_self_adjoint()
    }

    /// Main diagonal.
    pub fn diagonal(&self) -> BandView<'_, T> {
        self.band.stored_diagonal(0)
    }

    pub fn diagonal_mut(&mut self) -> BandViewMut<'_, T> {
        self.band.stored_diagonal_mut(0)
    }

    /// Sub-diagonal (entries `(i + 1, i)`).
    pub fn sub(&self) -> BandView<'_, T> {
        self.band.stored_diagonal(-1)
    }

    pub fn sub_mut(&mut self) -> BandViewMut<'_, T> {
        self.band.stored_diagonal_mut(-1)
    }

    /// Super-diagonal (entries `(i, i + 1)`); not stored for self-adjoint matrices.
    pub fn super_diagonal(&self) -> Result<BandView<'_, T>, BandError> {
        if self.is_self_adjoint() {
            return Err(BandError::Unsupported(
                "self-adjoint tridiagonal matrices do not store a super-diagonal",
            ));
        }
        self.band.diagonal(1)
    }

    pub fn super_diagonal_mut(&mut self) -> Result<BandViewMut<'_, T>, BandError> {
        if self.is_self_adjoint() {
            return Err(BandError::Unsupported(
                "self-adjoint tridiagonal matrices do not store a super-diagonal",
            ));
        }
        self.band.diagonal_mut(1)
    }

    pub fn as_band(&self) -> &BandMatrix<T> {
        &self.band
    }

    pub fn into_band(self) -> BandMatrix<T> {
        self.band
    }

    pub fn to_dense(&self) -> Mat<T> {
        self.band.to_dense()
    }
}
