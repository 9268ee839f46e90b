pub mod broadcast;
pub mod elementwise;
pub mod scalar;

pub use broadcast::{broadcast_add_op, broadcast_add_op_inplace};
pub use elementwise::{
    add_op, add_op_inplace, hadamard_op, hadamard_op_inplace, sub_op, sub_op_inplace,
};
pub use scalar::{add_scalar_op, add_scalar_op_inplace, mul_scalar_op, mul_scalar_op_inplace};
