use thiserror::Error;

// Unified error type for bandmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BandError {
    #[error("invalid band shape: {rows}x{cols} with {supers} super- and {subs} sub-diagonals")]
    InvalidShape {
        rows: usize,
        cols: usize,
        supers: usize,
        subs: usize,
    },
    #[error("diagonal {k} is outside the band [-{subs}, {supers}]")]
    OutOfBand { k: isize, supers: usize, subs: usize },
    #[error("column {col} out of range (matrix has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },
    #[error("entry ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("entry ({row}, {col}) lies outside the stored band")]
    OutsideBand { row: usize, col: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
