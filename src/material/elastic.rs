use super::ParamElastic;
use crate::tensor::{t2_ddot_t2, Tensor2, Tensor4};
use crate::StrError;

/// Implements the isotropic linear elastic model at a single material point
///
/// Holds the current (symmetrized) strain and the stress derived from it:
///
/// ```text
/// σ = K tr(ε) I + 2 G dev(ε)
/// ```
///
/// The tangent stiffness is constant:
///
/// ```text
/// C = K I⊗I + 2 G I4d
/// ```
pub struct Elastic {
    /// Bulk modulus K
    kk: f64,

    /// Shear modulus G
    gg: f64,

    /// Current strain ε (symmetric)
    eps: Tensor2,

    /// Current stress σ derived from ε
    sig: Tensor2,
}

impl Elastic {
    /// Allocates a new instance with validated moduli
    pub fn new(bulk: f64, shear: f64) -> Result<Self, StrError> {
        let param = ParamElastic::new(bulk, shear)?;
        Ok(Elastic::from_param(&param))
    }

    /// Allocates a new instance given pre-validated parameters
    pub fn from_param(param: &ParamElastic) -> Self {
        Elastic {
            kk: param.bulk,
            gg: param.shear,
            eps: Tensor2::new(),
            sig: Tensor2::new(),
        }
    }

    /// Returns the bulk modulus K
    pub fn bulk(&self) -> f64 {
        self.kk
    }

    /// Returns the shear modulus G
    pub fn shear(&self) -> f64 {
        self.gg
    }

    /// Sets the strain tensor and updates the stress
    ///
    /// Only the symmetric part of the input contributes to strain; the
    /// input is symmetrized on the way in and never rejected.
    pub fn set_strain(&mut self, eps: &[[f64; 3]; 3]) {
        let a = Tensor2::from_matrix(eps);
        self.update_strain(&a);
    }

    /// Returns a copy of the current strain tensor
    pub fn strain(&self) -> Tensor2 {
        self.eps
    }

    /// Returns a copy of the current stress tensor
    pub fn stress(&self) -> Tensor2 {
        self.sig
    }

    /// Computes the tangent stiffness tensor (independent of strain)
    pub fn tangent(&self) -> Tensor4 {
        let mut cc = Tensor4::i4_d();
        let ii = Tensor4::ii();
        for p in 0..81 {
            cc.vec[p] = self.kk * ii.vec[p] + 2.0 * self.gg * cc.vec[p];
        }
        cc
    }

    /// Computes the strain energy density for the current strain
    ///
    /// ```text
    /// U = K/2 tr(ε)² + G dev(ε) : dev(ε)
    /// ```
    ///
    /// This is the potential of the stress, i.e., σ = ∂U/∂ε.
    pub fn energy(&self) -> f64 {
        let tr = self.eps.trace();
        let d = self.eps.deviatoric();
        0.5 * self.kk * tr * tr + self.gg * t2_ddot_t2(&d, &d)
    }

    /// Symmetrizes the given tensor, stores it, and updates the stress
    pub(crate) fn update_strain(&mut self, a: &Tensor2) {
        self.eps = a.sym();
        let tr = self.eps.trace();
        let d = self.eps.deviatoric();
        for i in 0..3 {
            for j in 0..3 {
                let vol = if i == j { self.kk * tr } else { 0.0 };
                self.sig.set(i, j, vol + 2.0 * self.gg * d.get(i, j));
            }
        }
    }

    /// Stores the strain from a flat 9-component slice and updates the stress
    pub(crate) fn update_strain_slice(&mut self, a: &[f64]) {
        let mut t = Tensor2::new();
        t.vec.copy_from_slice(a);
        self.update_strain(&t);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
