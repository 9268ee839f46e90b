use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::linalg::matmul::matmul_op;
use crate::utils::testing::{check_matrix_near, create_test_matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_matmul_forward() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = create_test_matrix(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
    let output = matmul_op(&a, &b).unwrap();
    check_matrix_near(&output, (2, 2), &[19.0, 22.0, 43.0, 50.0], 1e-6);
}

#[test]
fn test_matmul_forward_non_square() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let b = create_test_matrix(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2);
    let output = a.matmul(&b).unwrap();
    check_matrix_near(&output, (2, 2), &[58.0, 64.0, 139.0, 154.0], 1e-6);
}

#[test]
fn test_matmul_vector_outer_product() {
    let col = create_test_matrix(vec![1.0, 2.0], 2, 1);
    let row = create_test_matrix(vec![3.0, 4.0, 5.0], 1, 3);
    let output = col.matmul(&row).unwrap();
    check_matrix_near(&output, (2, 3), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0], 0.0);
}

#[test]
fn test_matmul_identity() {
    let a = create_test_matrix(vec![1.5, -2.0, 0.25, 4.0, 3.0, 7.0], 2, 3);
    let i3 = Matrix::eye(3).unwrap();
    let i2 = Matrix::eye(2).unwrap();
    assert_eq!(a.matmul(&i3).unwrap(), a);
    assert_eq!(i2.matmul(&a).unwrap(), a);
}

#[test]
fn test_matmul_shape_mismatch_inner() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = create_test_matrix(vec![5.0, 6.0, 7.0], 3, 1);
    match matmul_op(&a, &b) {
        Err(MatrixError::ShapeMismatch { operation, .. }) => {
            assert_eq!(operation, "matmul (inner dim)");
        }
        other => panic!("Expected ShapeMismatch error for matmul inner dimensions, got {:?}", other),
    }
}

#[test]
fn test_matmul_associativity() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Matrix::uniform_with_rng(3, 4, -1.0, 1.0, &mut rng).unwrap();
    let b = Matrix::uniform_with_rng(4, 2, -1.0, 1.0, &mut rng).unwrap();
    let c = Matrix::uniform_with_rng(2, 5, -1.0, 1.0, &mut rng).unwrap();
    let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
    let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
    assert_eq!(left.shape(), (3, 5));
    assert!(left.equals_with_tolerance(&right, 1e-4));
}
