use dct2::direct::forward::dct2_direct;
use dct2::direct::inverse::idct2_direct;
use dct2::matrix::different;
use dct2::separable::two_pass::{dct2_separable, idct2_separable};
use dct2::threaded::choose_thread_count;
use dct2::threaded::dct_mt::{dct2_direct_mt, idct2_direct_mt};
use dct2::{
    DctError, Matrix, forward, forward_into, forward_parallel, inverse, inverse_into,
    inverse_parallel,
};

const TOL: f64 = 1e-10;

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.dims(), actual.dims(), "{}: shape mismatch", name);
    let (rows, cols) = expected.dims();
    for i in 0..rows {
        for j in 0..cols {
            assert!(
                !different(expected.at(i, j), actual.at(i, j), TOL),
                "{}: mismatch at ({}, {}): expected {}, got {}",
                name,
                i,
                j,
                expected.at(i, j),
                actual.at(i, j)
            );
        }
    }
}

fn ramp(rows: usize, cols: usize) -> Matrix {
    Matrix::new(
        rows,
        cols,
        (0..rows * cols).map(|i| ((i * 7) % 11) as f64 - 5.0).collect(),
    )
}

fn round_trip(x: &Matrix, name: &str) {
    let coeffs = forward(x).unwrap();
    let back = inverse(&coeffs).unwrap();
    assert_matrices_equal(x, &back, name);
}

// ============================================================
// Round trip scenarios
// ============================================================

#[test]
fn test_round_trip_4x4() {
    let x = Matrix::new(4, 4, (0..16).map(f64::from).collect());
    round_trip(&x, "4x4");
}

#[test]
fn test_round_trip_2x2_columns() {
    let x = Matrix::from_rows(&[&[0.0, 1.0], &[0.0, 1.0]]);
    round_trip(&x, "2x2 [[0,1],[0,1]]");
}

#[test]
fn test_round_trip_2x2_offset() {
    let x = Matrix::from_rows(&[&[6.0, 1.0], &[6.0, 1.0]]);
    round_trip(&x, "2x2 [[6,1],[6,1]]");
}

#[test]
fn test_round_trip_4x2() {
    let x = Matrix::new(4, 2, (0..8).map(f64::from).collect());
    round_trip(&x, "4x2");
}

#[test]
fn test_round_trip_non_square() {
    for (rows, cols) in [(2, 8), (8, 2), (6, 4), (10, 12)] {
        round_trip(&ramp(rows, cols), &format!("{}x{}", rows, cols));
    }
}

#[test]
fn test_inverse_then_forward() {
    let coeffs = ramp(6, 4);
    let x = inverse(&coeffs).unwrap();
    let back = forward(&x).unwrap();
    assert_matrices_equal(&coeffs, &back, "inverse then forward");
}

// ============================================================
// Known values
// ============================================================

#[test]
fn test_known_coefficients_2x2() {
    let x = Matrix::from_rows(&[&[0.0, 1.0], &[0.0, 1.0]]);
    let coeffs = forward(&x).unwrap();
    let expected = Matrix::from_rows(&[&[1.0, -1.0], &[0.0, 0.0]]);
    assert_matrices_equal(&expected, &coeffs, "2x2 coefficients");
}

#[test]
fn test_constant_has_only_dc() {
    let (rows, cols) = (4, 6);
    let x = Matrix::new(rows, cols, vec![3.0; rows * cols]);
    let coeffs = forward(&x).unwrap();

    let dc = 3.0 * ((rows * cols) as f64).sqrt();
    assert!((coeffs.at(0, 0) - dc).abs() < TOL, "dc = {}", coeffs.at(0, 0));
    for i in 0..rows {
        for j in 0..cols {
            if (i, j) != (0, 0) {
                assert!(coeffs.at(i, j).abs() < TOL, "ac ({}, {}) = {}", i, j, coeffs.at(i, j));
            }
        }
    }
}

#[test]
fn test_parseval() {
    let x = ramp(8, 6);
    let coeffs = forward(&x).unwrap();
    let (a, b) = (x.sum_of_squares(), coeffs.sum_of_squares());
    assert!((a - b).abs() <= 1e-9 * a, "energy {} vs {}", a, b);
}

#[test]
fn test_deterministic() {
    let x = ramp(6, 6);
    assert_eq!(forward(&x).unwrap(), forward(&x).unwrap());
    assert_eq!(inverse(&x).unwrap(), inverse(&x).unwrap());
}

// ============================================================
// Dimension rejection
// ============================================================

#[test]
fn test_odd_rows_rejected() {
    let x = Matrix::zeros(3, 4);
    let err = DctError::InvalidDimension { rows: 3, cols: 4 };
    assert_eq!(forward(&x), Err(err));
    assert_eq!(inverse(&x), Err(err));
}

#[test]
fn test_odd_cols_rejected() {
    let x = Matrix::zeros(4, 5);
    assert!(matches!(forward(&x), Err(DctError::InvalidDimension { rows: 4, cols: 5 })));
    assert!(matches!(inverse(&x), Err(DctError::InvalidDimension { .. })));
}

#[test]
fn test_rejection_leaves_dst_untouched() {
    let x = Matrix::zeros(3, 4);
    let original = Matrix::new(2, 2, vec![9.0, 8.0, 7.0, 6.0]);

    type Kernel = fn(&Matrix, &mut Matrix) -> dct2::Result<()>;
    let kernels: [(&str, Kernel); 6] = [
        ("forward_into", forward_into),
        ("inverse_into", inverse_into),
        ("separable", dct2_separable),
        ("separable inverse", idct2_separable),
        ("forward_parallel", |s, d| forward_parallel(s, d, 4)),
        ("inverse_parallel", |s, d| inverse_parallel(s, d, 4)),
    ];

    for (name, kernel) in kernels {
        let mut dst = original.clone();
        assert!(kernel(&x, &mut dst).is_err(), "{}: should fail", name);
        assert_eq!(dst, original, "{}: dst was modified", name);
    }
}

#[test]
fn test_error_message() {
    let err = forward(&Matrix::zeros(3, 4)).unwrap_err();
    assert_eq!(err.to_string(), "dct: matrix dimensions must be even, got 3x4");
}

#[test]
fn test_empty_matrix() {
    let x = Matrix::zeros(0, 4);
    assert_eq!(forward(&x).unwrap().dims(), (0, 4));
    assert_eq!(inverse(&x).unwrap().dims(), (0, 4));
}

// ============================================================
// Output buffer reuse
// ============================================================

#[test]
fn test_dst_is_reshaped_and_overwritten() {
    let x = ramp(4, 2);
    let expected = forward(&x).unwrap();

    let mut dst = Matrix::new(3, 3, vec![f64::NAN; 9]);
    forward_into(&x, &mut dst).unwrap();
    assert_matrices_equal(&expected, &dst, "reused dst");

    let mut back = Matrix::new(8, 8, vec![42.0; 64]);
    inverse_into(&dst, &mut back).unwrap();
    assert_matrices_equal(&x, &back, "reused inverse dst");
}

// ============================================================
// Kernel agreement
// ============================================================

#[test]
fn test_separable_matches_direct() {
    for (rows, cols) in [(2, 2), (4, 4), (4, 2), (8, 6), (2, 10)] {
        let x = ramp(rows, cols);

        let mut direct = Matrix::default();
        let mut separable = Matrix::default();
        dct2_direct(&x, &mut direct).unwrap();
        dct2_separable(&x, &mut separable).unwrap();
        assert_matrices_equal(&direct, &separable, &format!("forward {}x{}", rows, cols));

        idct2_direct(&x, &mut direct).unwrap();
        idct2_separable(&x, &mut separable).unwrap();
        assert_matrices_equal(&direct, &separable, &format!("inverse {}x{}", rows, cols));
    }
}

// ============================================================
// Multi-threaded tests
// ============================================================

#[test]
fn test_parallel_matches_single_threaded() {
    // 56x56 clears both thresholds, 40x40 only the first
    for (rows, cols) in [(56, 56), (40, 40), (38, 42), (6, 4)] {
        let x = ramp(rows, cols);

        let mut single = Matrix::default();
        let mut parallel = Matrix::default();
        dct2_direct(&x, &mut single).unwrap();
        dct2_direct_mt(&x, &mut parallel, 4).unwrap();
        assert_matrices_equal(&single, &parallel, &format!("forward mt {}x{}", rows, cols));

        idct2_direct(&x, &mut single).unwrap();
        idct2_direct_mt(&x, &mut parallel, 3).unwrap();
        assert_matrices_equal(&single, &parallel, &format!("inverse mt {}x{}", rows, cols));
    }
}

#[test]
fn test_parallel_round_trip() {
    let x = ramp(56, 56);
    let mut coeffs = Matrix::default();
    let mut back = Matrix::default();
    forward_parallel(&x, &mut coeffs, 8).unwrap();
    inverse_parallel(&coeffs, &mut back, 8).unwrap();
    assert_matrices_equal(&x, &back, "parallel round trip");
}

#[test]
fn test_choose_thread_count() {
    assert_eq!(choose_thread_count(4, 4, 8), 1);
    assert_eq!(choose_thread_count(40, 40, 8), 2);
    assert_eq!(choose_thread_count(56, 56, 8), 8);
    assert_eq!(choose_thread_count(40, 40, 0), 1);
    assert!(choose_thread_count(2, 4000, 16) <= 2);
}
