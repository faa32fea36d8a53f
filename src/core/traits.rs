//! Core matrix-access traits for bandmat.

/// Logical shape of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Read access to a logical entry.
pub trait MatrixGet<T> {
    /// Value at `(i, j)`. Callers keep `i < nrows()` and `j < ncols()`.
    fn get(&self, i: usize, j: usize) -> T;
}

/// Materialize a matrix into a freshly allocated dense `faer::Mat`.
pub trait ToDense<T> {
    /// The returned matrix never aliases internal storage.
    fn to_dense(&self) -> faer::Mat<T>;
}
