use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::utils::testing::{check_matrix_near, create_test_matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_3x3() -> Matrix {
    create_test_matrix(vec![4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0], 3, 3)
}

/// Random matrix made diagonally dominant so it is comfortably invertible.
fn well_conditioned(n: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::uniform_with_rng(n, n, -1.0, 1.0, &mut rng).unwrap();
    let shift = Matrix::eye(n).unwrap().mul_scalar(n as f32 + 1.0);
    m.add_(&shift).unwrap();
    m
}

#[test]
fn test_cofactor_3x3() {
    let c = sample_3x3().cofactor().unwrap();
    check_matrix_near(
        &c,
        (3, 3),
        &[13.0, -7.0, 3.0, -11.0, 8.0, -6.0, -5.0, 2.0, 3.0],
        1e-5,
    );
}

#[test]
fn test_adjoint_is_transposed_cofactor() {
    let m = sample_3x3();
    let adj = m.adjoint().unwrap();
    check_matrix_near(
        &adj,
        (3, 3),
        &[13.0, -11.0, -5.0, -7.0, 8.0, 2.0, 3.0, -6.0, 3.0],
        1e-5,
    );
    // A * adj(A) = det(A) * I
    let product = m.matmul(&adj).unwrap();
    let expected = Matrix::eye(3).unwrap().mul_scalar(9.0);
    assert!(product.equals_with_tolerance(&expected, 1e-4));
}

#[test]
fn test_cofactor_small_cases() {
    let one = create_test_matrix(vec![5.0], 1, 1);
    check_matrix_near(&one.cofactor().unwrap(), (1, 1), &[1.0], 0.0);

    let two = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    check_matrix_near(&two.cofactor().unwrap(), (2, 2), &[4.0, -3.0, -2.0, 1.0], 0.0);
    check_matrix_near(&two.adjoint().unwrap(), (2, 2), &[4.0, -2.0, -3.0, 1.0], 0.0);
}

#[test]
fn test_cofactor_adjoint_non_square() {
    let rect = create_test_matrix(vec![1.0; 6], 2, 3);
    assert!(matches!(rect.cofactor(), Err(MatrixError::InvalidShape { .. })));
    assert!(matches!(rect.adjoint(), Err(MatrixError::InvalidShape { .. })));
    assert!(matches!(rect.inverse(), Err(MatrixError::InvalidShape { .. })));
}

#[test]
fn test_inverse_2x2() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let inv = a.inverse().unwrap();
    check_matrix_near(&inv, (2, 2), &[-2.0, 1.0, 1.5, -0.5], 1e-6);
}

#[test]
fn test_inverse_1x1() {
    let a = create_test_matrix(vec![4.0], 1, 1);
    check_matrix_near(&a.inverse().unwrap(), (1, 1), &[0.25], 0.0);
}

#[test]
fn test_inverse_3x3_round_trip() {
    let m = sample_3x3();
    let inv = m.inverse().unwrap();
    let identity = Matrix::eye(3).unwrap();
    assert!(m.matmul(&inv).unwrap().equals_with_tolerance(&identity, 1e-4));
    assert!(inv.matmul(&m).unwrap().equals_with_tolerance(&identity, 1e-4));
    assert!(inv.inverse().unwrap().equals_with_tolerance(&m, 1e-4));
}

#[test]
fn test_inverse_random_well_conditioned() {
    for (n, seed) in [(2, 1), (3, 2), (4, 3), (5, 4)] {
        let m = well_conditioned(n, seed);
        let inv = m.inverse().unwrap();
        let identity = Matrix::eye(n).unwrap();
        assert!(
            m.matmul(&inv).unwrap().equals_with_tolerance(&identity, 1e-4),
            "m * inverse(m) != I for n = {}",
            n
        );
        // Entries of m reach n + 2, so allow a little more absolute error.
        assert!(inv.inverse().unwrap().equals_with_tolerance(&m, 1e-3));
    }
}

#[test]
fn test_inverse_singular_zero_matrix() {
    let z = Matrix::zeros(3, 3).unwrap();
    assert_eq!(z.inverse().err(), Some(MatrixError::SingularMatrix { determinant: 0.0 }));
}

#[test]
fn test_inverse_singular_duplicate_rows() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 3);
    assert!(matches!(a.inverse(), Err(MatrixError::SingularMatrix { .. })));

    let b = create_test_matrix(vec![1.0, 2.0, 2.0, 4.0], 2, 2);
    assert!(matches!(b.inverse(), Err(MatrixError::SingularMatrix { .. })));
}

#[test]
fn test_inverse_singular_random_duplicate_rows() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 3..=5 {
        for _ in 0..200 {
            let mut m = Matrix::uniform_with_rng(n, n, -1.0, 1.0, &mut rng).unwrap();
            for c in 0..n {
                let value = m.get(0, c).unwrap();
                m.set(n - 1, c, value).unwrap();
            }
            match m.inverse() {
                Err(MatrixError::SingularMatrix { .. }) => {}
                other => panic!("Expected SingularMatrix for {:?}, got {:?}", m, other),
            }
        }
    }
}

#[test]
fn test_inverse_singular_small_entries() {
    // det rounds to about 9.3e-10 in f32 rather than to 0.
    let a = create_test_matrix(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.1, 0.2, 0.3], 3, 3);
    assert!(matches!(a.inverse(), Err(MatrixError::SingularMatrix { .. })));
}

#[test]
fn test_inverse_threshold_is_scale_relative() {
    // det = 1e-12, but the matrix is perfectly conditioned.
    let tiny = Matrix::eye(3).unwrap().mul_scalar(1e-4);
    let inv = tiny.inverse().unwrap();
    check_matrix_near(&inv.mul_scalar(1e-4), (3, 3), Matrix::eye(3).unwrap().as_slice(), 1e-5);

    let huge = create_test_matrix(vec![1e6, 2e6, 3e6, 4e6], 2, 2);
    check_matrix_near(&huge.inverse().unwrap(), (2, 2), &[-2e-6, 1e-6, 1.5e-6, -0.5e-6], 1e-10);
}

#[test]
fn test_inverse_with_custom_epsilon() {
    // |det| is about 5e-4 of the product of the row norms.
    let a = create_test_matrix(vec![1.0, 1.0, 1.0, 1.001], 2, 2);
    assert!(a.inverse().is_ok());
    assert!(matches!(
        a.inverse_with_epsilon(1e-3),
        Err(MatrixError::SingularMatrix { .. })
    ));
    // Only an exactly zero determinant is singular with a zero threshold.
    let b = create_test_matrix(vec![1.0, 2.0, 2.0, 4.0], 2, 2);
    assert!(matches!(
        b.inverse_with_epsilon(0.0),
        Err(MatrixError::SingularMatrix { determinant }) if determinant == 0.0
    ));
}
