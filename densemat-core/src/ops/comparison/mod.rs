pub mod equal;

pub use equal::equal_with_tolerance_op;
