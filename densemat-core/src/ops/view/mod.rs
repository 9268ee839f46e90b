// src/ops/view/mod.rs
//
// Despite the module name, nothing here aliases storage: every extraction
// returns an independent copy, and `reshape_` only relabels the dimensions of
// the buffer it already owns.

pub mod reshape;
pub mod slice;

pub use reshape::{reshape_op, reshape_op_inplace};
pub use slice::{col_op, row_op, slice_op};
