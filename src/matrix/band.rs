//! Banded matrix storage.
//!
//! A `rows x cols` matrix whose entries are confined to the diagonals `k = j - i` with
//! `-subs <= k <= supers` is stored in a single flat buffer of
//! `(supers + subs + 1) * cols` coefficients. The buffer is column-major with `cols`
//! positions per storage column, and storage column `s = supers - k` holds diagonal `k`.
//! Entry `(i, j)` lives at position `j` of storage column `supers + i - j`, so
//!
//! - every diagonal is a contiguous run of its storage column, and
//! - every matrix column is a strided walk across storage columns (stride `cols`).
//!
//! Diagonals that hit a rectangular edge are shorter than `min(rows, cols)`; the cells
//! they leave unused stay zero and are never read back.
//!
//! # Example
//! ```rust
//! use bandmat::matrix::BandMatrix;
//! let mut m = BandMatrix::<f64>::new(4, 4, 1, 1).unwrap();
//! m.diagonal_mut(0).unwrap().fill(2.0);
//! m.diagonal_mut(1).unwrap().fill(-1.0);
//! m.diagonal_mut(-1).unwrap().fill(-1.0);
//! let d = m.to_dense();
//! assert_eq!(d[(1, 0)], -1.0);
//! assert_eq!(d[(0, 2)], 0.0);
//! ```

use crate::config::BandOptions;
use crate::core::traits::{MatShape, MatrixGet, ToDense};
use crate::error::BandError;
use crate::matrix::view::{BandView, BandViewMut};
use faer::{Mat, MatRef};
use num_traits::Zero;
use std::fmt;

/// Compact band storage with diagonal and column views.
#[derive(Clone, Debug, PartialEq)]
pub struct BandMatrix<T> {
    rows: usize,
    cols: usize,
    supers: usize,
    subs: usize,
    options: BandOptions,
    data: Vec<T>,
}

impl<T: Copy + Zero> BandMatrix<T> {
    /// Allocate a zero band matrix.
    ///
    /// Requires `rows, cols >= 1`, `supers <= cols - 1` and `subs <= rows - 1`.
    pub fn new(rows: usize, cols: usize, supers: usize, subs: usize) -> Result<Self, BandError> {
        Self::with_options(rows, cols, supers, subs, BandOptions::empty())
    }

    /// Allocate a zero band matrix with explicit storage options.
    ///
    /// `SELF_ADJOINT` additionally requires a square shape and `supers == 0`.
    pub fn with_options(
        rows: usize,
        cols: usize,
        supers: usize,
        subs: usize,
        options: BandOptions,
    ) -> Result<Self, BandError> {
        if rows == 0 || cols == 0 || supers >= cols || subs >= rows {
            return Err(BandError::InvalidShape { rows, cols, supers, subs });
        }
        if options.is_self_adjoint() && (rows != cols || supers != 0) {
            return Err(BandError::Unsupported(
                "self-adjoint storage needs a square matrix with no stored super-diagonals",
            ));
        }
        let size = supers
            .checked_add(subs)
            .and_then(|n| n.checked_add(1))
            .and_then(|ndiag| ndiag.checked_mul(cols))
            .ok_or(BandError::InvalidShape { rows, cols, supers, subs })?;
        Ok(Self {
            rows,
            cols,
            supers,
            subs,
            options,
            data: vec![T::zero(); size],
        })
    }

    /// Sample the band `[-subs, supers]` of a dense matrix. Off-band entries are dropped.
    pub fn from_dense(dense: &Mat<T>, supers: usize, subs: usize) -> Result<Self, BandError> {
        let mut band = Self::new(dense.nrows(), dense.ncols(), supers, subs)?;
        for j in 0..band.cols {
            let (i0, i1) = band.column_rows(j);
            for i in i0..i1 {
                let at = band.offset_of(i, j);
                band.data[at] = dense[(i, j)];
            }
        }
        Ok(band)
    }

    /// Number of logical rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored super-diagonals.
    pub fn supers(&self) -> usize {
        self.supers
    }

    /// Number of stored sub-diagonals.
    pub fn subs(&self) -> usize {
        self.subs
    }

    /// Storage options fixed at construction.
    pub fn options(&self) -> BandOptions {
        self.options
    }

    fn ndiag(&self) -> usize {
        self.supers + self.subs + 1
    }

    /// Length of stored diagonal `k`, or `None` if `k` is outside `[-subs, supers]`.
    ///
    /// For `k >= 0` this is `min(rows, cols - k)`; for `k < 0`, `min(rows + k, cols)`.
    pub fn diagonal_len(&self, k: isize) -> Option<usize> {
        if k > self.supers as isize || k < -(self.subs as isize) {
            return None;
        }
        let len = if k >= 0 {
            self.rows.min(self.cols - k as usize)
        } else {
            (self.rows - k.unsigned_abs()).min(self.cols)
        };
        Some(len)
    }

    /// Whether `(i, j)` is inside the matrix and inside the logical band.
    pub fn in_band(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.slot(i, j).is_some()
    }

    // Storage offset of (i, j); requires -subs <= j - i <= supers.
    #[inline]
    fn offset_of(&self, i: usize, j: usize) -> usize {
        (self.supers + i - j) * self.cols + j
    }

    // Storage offset of a logical entry, following the self-adjoint mirror.
    fn slot(&self, i: usize, j: usize) -> Option<usize> {
        let (i, j) = if self.options.is_self_adjoint() && j > i {
            (j, i)
        } else {
            (i, j)
        };
        let k = j as isize - i as isize;
        if k > self.supers as isize || k < -(self.subs as isize) {
            None
        } else {
            Some(self.offset_of(i, j))
        }
    }

    #[inline]
    fn value_at(&self, i: usize, j: usize) -> T {
        match self.slot(i, j) {
            Some(at) => self.data[at],
            None => T::zero(),
        }
    }

    // Half-open row range of the stored coefficients of column j.
    fn column_rows(&self, j: usize) -> (usize, usize) {
        let i0 = j.saturating_sub(self.supers);
        let i1 = self.rows.min(j + self.subs + 1);
        (i0, i1.max(i0))
    }

    // (offset, len) of diagonal k inside the buffer.
    fn diagonal_span(&self, k: isize) -> Result<(usize, usize), BandError> {
        let len = self.diagonal_len(k).ok_or(BandError::OutOfBand {
            k,
            supers: self.supers,
            subs: self.subs,
        })?;
        Ok((self.diagonal_offset(k), len))
    }

    // Buffer offset of the first element of diagonal k; requires -subs <= k <= supers.
    #[inline]
    fn diagonal_offset(&self, k: isize) -> usize {
        let s = (self.supers as isize - k) as usize;
        let start = if k >= 0 { k as usize } else { 0 };
        s * self.cols + start
    }

    // Diagonals the shape guarantees are stored (e.g. the main diagonal).
    pub(crate) fn stored_diagonal(&self, k: isize) -> BandView<'_, T> {
        let len = self.diagonal_len(k).unwrap_or(0);
        let offset = if len > 0 { self.diagonal_offset(k) } else { 0 };
        BandView::new(&self.data, offset, len, 1)
    }

    pub(crate) fn stored_diagonal_mut(&mut self, k: isize) -> BandViewMut<'_, T> {
        let len = self.diagonal_len(k).unwrap_or(0);
        let offset = if len > 0 { self.diagonal_offset(k) } else { 0 };
        BandViewMut::new(&mut self.data, offset, len, 1)
    }

    // (offset, len) of the stored part of column j inside the buffer.
    fn column_span(&self, j: usize) -> Result<(usize, usize), BandError> {
        if j >= self.cols {
            return Err(BandError::ColumnOutOfRange { col: j, cols: self.cols });
        }
        let (i0, i1) = self.column_rows(j);
        if i0 == i1 {
            return Ok((0, 0));
        }
        Ok((self.offset_of(i0, j), i1 - i0))
    }

    /// View of diagonal `k` (`k = 0` main, `k > 0` above, `k < 0` below).
    ///
    /// Only stored diagonals are addressable. A `SELF_ADJOINT` matrix stores no
    /// super-diagonals, so `diagonal(1)` is `OutOfBand` there even though `to_dense`
    /// shows the mirrored sub-diagonal above the main one.
    pub fn diagonal(&self, k: isize) -> Result<BandView<'_, T>, BandError> {
        let (offset, len) = self.diagonal_span(k)?;
        Ok(BandView::new(&self.data, offset, len, 1))
    }

    /// Mutable view of diagonal `k`. Element `t` is entry `(t, t + k)` for `k >= 0`
    /// and `(t - k, t)` for `k < 0`.
    pub fn diagonal_mut(&mut self, k: isize) -> Result<BandViewMut<'_, T>, BandError> {
        let (offset, len) = self.diagonal_span(k)?;
        Ok(BandViewMut::new(&mut self.data, offset, len, 1))
    }

    /// View of the stored coefficients of column `j`, rows
    /// `max(0, j - supers) ..= min(rows - 1, j + subs)` top to bottom. Empty when the
    /// column lies entirely right of the band.
    pub fn column(&self, j: usize) -> Result<BandView<'_, T>, BandError> {
        let (offset, len) = self.column_span(j)?;
        Ok(BandView::new(&self.data, offset, len, self.cols))
    }

    /// Mutable view of the stored coefficients of column `j`.
    pub fn column_mut(&mut self, j: usize) -> Result<BandViewMut<'_, T>, BandError> {
        let (offset, len) = self.column_span(j)?;
        let stride = self.cols;
        Ok(BandViewMut::new(&mut self.data, offset, len, stride))
    }

    /// Logical entry `(i, j)`; zero outside the band.
    pub fn coeff(&self, i: usize, j: usize) -> Result<T, BandError> {
        self.check_index(i, j)?;
        Ok(self.value_at(i, j))
    }

    /// Overwrite logical entry `(i, j)`. Entries outside the band cannot be stored.
    pub fn set_coeff(&mut self, i: usize, j: usize, value: T) -> Result<(), BandError> {
        self.check_index(i, j)?;
        let at = self
            .slot(i, j)
            .ok_or(BandError::OutsideBand { row: i, col: j })?;
        self.data[at] = value;
        Ok(())
    }

    fn check_index(&self, i: usize, j: usize) -> Result<(), BandError> {
        if i >= self.rows || j >= self.cols {
            return Err(BandError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Raw coefficient buffer: `cols` rows, one column per diagonal from `supers`
    /// down to `-subs`.
    pub fn coeffs(&self) -> MatRef<'_, T> {
        MatRef::from_column_major_slice(&self.data, self.cols, self.ndiag())
    }

    /// Dense `rows x cols` copy. Entries outside the band are zero.
    pub fn to_dense(&self) -> Mat<T> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.value_at(i, j))
    }
}

#[cfg(feature = "rayon")]
impl<T: Copy + Zero + Send + Sync> BandMatrix<T> {
    /// Same as [`to_dense`](Self::to_dense), building the dense columns with Rayon.
    pub fn to_dense_parallel(&self) -> Mat<T> {
        use rayon::prelude::*;
        let columns: Vec<Vec<T>> = (0..self.cols)
            .into_par_iter()
            .map(|j| (0..self.rows).map(|i| self.value_at(i, j)).collect())
            .collect();
        Mat::from_fn(self.rows, self.cols, |i, j| columns[j][i])
    }
}

impl<T: Copy + Zero> MatShape for BandMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T: Copy + Zero> MatrixGet<T> for BandMatrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self.value_at(i, j)
    }
}

impl<T: Copy + Zero> ToDense<T> for BandMatrix<T> {
    fn to_dense(&self) -> Mat<T> {
        BandMatrix::to_dense(self)
    }
}

impl<T: Copy + Zero + fmt::Display> fmt::Display for BandMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BandMatrix({}x{}, supers={}, subs={})",
            self.rows, self.cols, self.supers, self.subs
        )?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.value_at(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
