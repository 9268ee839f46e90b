pub mod argmax;

pub use argmax::argmax_op;
