use densemat_core::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared helpers for the integration tests. Not every test binary uses all
// of them.
#[allow(dead_code)]
pub fn create_test_matrix(data: Vec<f32>, rows: usize, cols: usize) -> Matrix {
    Matrix::from_vec(data, rows, cols).expect("Test matrix creation failed")
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
