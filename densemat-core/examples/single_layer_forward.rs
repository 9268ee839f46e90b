//! # Single dense layer forward pass
//!
//! Runs a batch of inputs through one fully connected layer:
//! `sigmoid(x @ w + b)`, then picks the most likely class per sample.
//!
//! `cargo run --example single_layer_forward`

use densemat_core::{sigmoid, Matrix, MatrixError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MatrixError> {
    let mut rng = StdRng::seed_from_u64(0);

    let batch = 4;
    let in_features = 3;
    let out_features = 2;

    let x = Matrix::uniform_with_rng(batch, in_features, -1.0, 1.0, &mut rng)?;
    let mut w = Matrix::gaussian_with_rng(in_features, out_features, &mut rng)?;
    // Scale the weights down, as a simple Xavier-style initialization.
    w.mul_scalar_(1.0 / (in_features as f32).sqrt());
    let b = Matrix::zeros(1, out_features)?;

    let mut logits = x.matmul(&w)?;
    logits.broadcast_add_(&b)?;
    logits.apply_(sigmoid);

    println!("Inputs:");
    x.print_matrix();
    println!("Activations:");
    logits.print_matrix();

    for r in 0..batch {
        let class = logits.row(r)?.argmax()?;
        println!("sample {} -> class {}", r, class);
    }
    Ok(())
}
