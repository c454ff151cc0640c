//! Linelast - Isotropic linear elasticity for batches of material points
//!
//! This crate implements the isotropic linear elastic constitutive law in 3D
//! Cartesian space and evaluates it pointwise over arbitrary N-dimensional
//! grids of material points (e.g., the integration points of a finite element
//! mesh). It provides:
//!
//! * Rank-2 and rank-4 tensor algebra on 3x3 components ([`Tensor2`], [`Tensor4`])
//! * The single-point elastic law: stress, tangent stiffness, and strain
//!   energy from the bulk and shear moduli ([`Elastic`])
//! * A batched container assigning per-point parameters via index masks and
//!   evaluating the whole grid in one call ([`ElasticArray`])
//!
//! The stress follows the classical decomposition:
//!
//! ```text
//! σ = K tr(ε) I + 2 G dev(ε)
//! C = K I⊗I + 2 G I4d
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod material;
mod tensor;
mod util;
pub use crate::material::*;
pub use crate::tensor::*;
pub use crate::util::*;
