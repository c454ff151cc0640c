//! Implements the isotropic linear elastic material model

mod elastic;
mod elastic_array;
mod parameters;
pub use crate::material::elastic::*;
pub use crate::material::elastic_array::*;
pub use crate::material::parameters::*;
