//! Implements rank-2 and rank-4 tensor operations in 3D Cartesian space

mod invariants;
mod operations;
mod tensor2;
mod tensor4;
pub use crate::tensor::invariants::*;
pub use crate::tensor::operations::*;
pub use crate::tensor::tensor2::*;
pub use crate::tensor::tensor4::*;
