//! Band/dense equivalence tests for `BandMatrix`.
//!
//! Every scenario mutates a band matrix and a dense `faer::Mat` reference with the same
//! sequence of diagonal and column fills, then compares the dense conversion of the band
//! matrix against the reference. Shapes are drawn at random within
//! `rows, cols in [1, 10]`, `supers in [0, cols - 1]`, `subs in [0, rows - 1]`.
//!
//! `BANDMAT_REPEAT` scales the number of random shapes (default 1, i.e. 10 shapes) and
//! `BANDMAT_SEED` pins the generator.

use approx::assert_relative_eq;
use bandmat::matrix::{BandMatrix, DenseReference, approx_eq};
use faer::Mat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 1e-5;

fn repeat() -> usize {
    std::env::var("BANDMAT_REPEAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1)
}

fn rng() -> StdRng {
    match std::env::var("BANDMAT_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw a random valid band shape `(rows, cols, supers, subs)`.
fn random_shape(rng: &mut StdRng) -> (usize, usize, usize, usize) {
    let rows = rng.gen_range(1..=10);
    let cols = rng.gen_range(1..=10);
    let supers = rng.gen_range(0..cols);
    let subs = rng.gen_range(0..rows);
    (rows, cols, supers, subs)
}

fn in_band(i: usize, j: usize, supers: usize, subs: usize) -> bool {
    let k = j as isize - i as isize;
    -(subs as isize) <= k && k <= supers as isize
}

/// Diagonal fills, then column fills, each checked against the dense reference.
fn check_band(rows: usize, cols: usize, supers: usize, subs: usize) {
    let shape = format!("{rows}x{cols}, supers={supers}, subs={subs}");
    let mut m = BandMatrix::<f32>::new(rows, cols, supers, subs).unwrap();
    let mut dm = Mat::from_fn(rows, cols, |_, _| 0.0f32);

    m.diagonal_mut(0).unwrap().fill(123.0);
    dm.fill_diagonal(0, 123.0);
    for i in 1..=supers {
        m.diagonal_mut(i as isize).unwrap().fill(i as f32);
        dm.fill_diagonal(i as isize, i as f32);
    }
    for i in 1..=subs {
        m.diagonal_mut(-(i as isize)).unwrap().fill(-(i as f32));
        dm.fill_diagonal(-(i as isize), -(i as f32));
    }
    assert!(approx_eq(&dm, &m.to_dense(), EPS), "diagonal fill mismatch for {shape}");

    for j in 0..cols {
        m.column_mut(j).unwrap().fill((j + 1) as f32);
        dm.fill_col(j, (j + 1) as f32);
    }
    let d = rows.min(cols);
    let a = cols.saturating_sub(d + supers);
    let b = rows.saturating_sub(d + subs);
    if a > 0 {
        dm.zero_block(0, d + supers, rows, a);
    }
    dm.zero_upper_triangle(0, supers + 1, cols - supers - 1 - a);
    dm.zero_lower_triangle(subs + 1, 0, rows - subs - 1 - b);
    if b > 0 {
        dm.zero_block(d + subs, 0, b, cols);
    }
    let dense = m.to_dense();
    assert!(approx_eq(&dm, &dense, EPS), "column fill mismatch for {shape}");

    // column values inside the band, exact zero everywhere else
    for j in 0..cols {
        for i in 0..rows {
            let want = if in_band(i, j, supers, subs) { (j + 1) as f32 } else { 0.0 };
            assert_eq!(dense[(i, j)], want, "entry ({i}, {j}) for {shape}");
        }
    }
    if a > 0 {
        for j in d + supers..cols {
            assert!((0..rows).all(|i| dense[(i, j)] == 0.0), "column {j} not zero for {shape}");
        }
    }
    if b > 0 {
        for i in d + subs..rows {
            assert!((0..cols).all(|j| dense[(i, j)] == 0.0), "row {i} not zero for {shape}");
        }
    }
}

/// The 4x4 tridiagonal example with main 123, super 1 and sub -1.
#[test]
fn tridiagonal_4x4_example() {
    let mut m = BandMatrix::<f64>::new(4, 4, 1, 1).unwrap();
    m.diagonal_mut(0).unwrap().fill(123.0);
    m.diagonal_mut(1).unwrap().fill(1.0);
    m.diagonal_mut(-1).unwrap().fill(-1.0);
    let expected = [
        [123.0, 1.0, 0.0, 0.0],
        [-1.0, 123.0, 1.0, 0.0],
        [0.0, -1.0, 123.0, 1.0],
        [0.0, 0.0, -1.0, 123.0],
    ];
    let d = m.to_dense();
    for i in 0..4 {
        for j in 0..4 {
            assert_relative_eq!(d[(i, j)], expected[i][j], epsilon = 1e-12);
        }
    }
}

/// Random shapes, repeated `10 * BANDMAT_REPEAT` times.
#[test]
fn random_shapes_round_trip() {
    let mut rng = rng();
    for _ in 0..10 * repeat() {
        let (rows, cols, supers, subs) = random_shape(&mut rng);
        check_band(rows, cols, supers, subs);
    }
}

/// Every shape up to 6x6, covering the wide, tall and degenerate corners.
#[test]
fn exhaustive_small_shapes() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            for supers in 0..cols {
                for subs in 0..rows {
                    check_band(rows, cols, supers, subs);
                }
            }
        }
    }
}

/// Very wide matrix with a narrow band: most columns are outside the band.
#[test]
fn wide_matrix_trailing_columns_are_zero() {
    check_band(2, 10, 1, 1);
    check_band(1, 10, 0, 0);
    check_band(1, 10, 9, 0);
}

/// Very tall matrix with a narrow band: most rows are outside the band.
#[test]
fn tall_matrix_trailing_rows_are_zero() {
    check_band(10, 2, 1, 1);
    check_band(10, 1, 0, 0);
    check_band(10, 1, 0, 9);
}

/// Rebuilding from the dense form reproduces the band exactly.
#[test]
fn from_dense_round_trip() {
    let mut rng = rng();
    for _ in 0..10 * repeat() {
        let (rows, cols, supers, subs) = random_shape(&mut rng);
        let mut m = BandMatrix::<f64>::new(rows, cols, supers, subs).unwrap();
        for k in -(subs as isize)..=supers as isize {
            let mut diag = m.diagonal_mut(k).unwrap();
            for t in 0..diag.len() {
                diag[t] = rng.r#gen::<f64>();
            }
        }
        let back = BandMatrix::from_dense(&m.to_dense(), supers, subs).unwrap();
        assert!(approx_eq(&back, &m, 0.0), "from_dense mismatch");
        assert_eq!(back, m);
    }
}
