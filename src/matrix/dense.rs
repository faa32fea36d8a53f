//! Dense-matrix helpers on top of Faer.
//!
//! `faer::Mat<T>` is the ground-truth type band storage is checked against. This module
//! plugs it into the core traits and adds the handful of in-place edits (diagonal and
//! column fills, block and triangle zeroing) needed to build a dense reference with the
//! same sequence of mutations as a [`BandMatrix`](crate::matrix::BandMatrix).

use crate::core::traits::{MatShape, MatrixGet, ToDense};
use faer::Mat;
use num_traits::{Float, Zero};

impl<T: Copy> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Copy> ToDense<T> for Mat<T> {
    fn to_dense(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }
}

/// In-place edits on a dense reference matrix.
pub trait DenseReference<T> {
    /// Set every entry `(i, i + k)` inside the matrix to `value`.
    fn fill_diagonal(&mut self, k: isize, value: T);
    /// Set column `j` to `value`.
    fn fill_col(&mut self, j: usize, value: T);
    /// Zero the `nr x nc` block at `(r0, c0)`.
    fn zero_block(&mut self, r0: usize, c0: usize, nr: usize, nc: usize);
    /// Zero the upper triangle (diagonal included) of the `n x n` block at `(r0, c0)`.
    fn zero_upper_triangle(&mut self, r0: usize, c0: usize, n: usize);
    /// Zero the lower triangle (diagonal included) of the `n x n` block at `(r0, c0)`.
    fn zero_lower_triangle(&mut self, r0: usize, c0: usize, n: usize);
}

impl<T: Copy + Zero> DenseReference<T> for Mat<T> {
    fn fill_diagonal(&mut self, k: isize, value: T) {
        let (rows, cols) = (self.nrows() as isize, self.ncols() as isize);
        for i in 0..rows {
            let j = i + k;
            if (0..cols).contains(&j) {
                self[(i as usize, j as usize)] = value;
            }
        }
    }

    fn fill_col(&mut self, j: usize, value: T) {
        for i in 0..self.nrows() {
            self[(i, j)] = value;
        }
    }

    fn zero_block(&mut self, r0: usize, c0: usize, nr: usize, nc: usize) {
        assert!(r0 + nr <= self.nrows() && c0 + nc <= self.ncols(), "block out of range");
        for j in c0..c0 + nc {
            for i in r0..r0 + nr {
                self[(i, j)] = T::zero();
            }
        }
    }

    fn zero_upper_triangle(&mut self, r0: usize, c0: usize, n: usize) {
        assert!(r0 + n <= self.nrows() && c0 + n <= self.ncols(), "block out of range");
        for jj in 0..n {
            for ii in 0..=jj {
                self[(r0 + ii, c0 + jj)] = T::zero();
            }
        }
    }

    fn zero_lower_triangle(&mut self, r0: usize, c0: usize, n: usize) {
        assert!(r0 + n <= self.nrows() && c0 + n <= self.ncols(), "block out of range");
        for jj in 0..n {
            for ii in jj..n {
                self[(r0 + ii, c0 + jj)] = T::zero();
            }
        }
    }
}

/// Relative Frobenius-norm comparison:
/// `||a - b||^2 <= eps^2 * min(||a||^2, ||b||^2)`. Shapes must match.
pub fn approx_eq<T, A, B>(a: &A, b: &B, eps: T) -> bool
where
    T: Float,
    A: MatShape + MatrixGet<T>,
    B: MatShape + MatrixGet<T>,
{
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return false;
    }
    let (mut diff, mut na, mut nb) = (T::zero(), T::zero(), T::zero());
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            let (x, y) = (a.get(i, j), b.get(i, j));
            diff = diff + (x - y) * (x - y);
            na = na + x * x;
            nb = nb + y * y;
        }
    }
    diff <= eps * eps * na.min(nb)
}
