/// Implements a fourth-order tensor in 3D Cartesian space
///
/// The 81 components are stored in row-major order, i.e., the (i,j,k,l)
/// component sits at position `i·27 + j·9 + k·3 + l`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor4 {
    /// Components in row-major order
    pub vec: [f64; 81],
}

impl Tensor4 {
    /// Allocates a new instance with zeroed components
    pub fn new() -> Self {
        Tensor4 { vec: [0.0; 81] }
    }

    /// Returns the (i,j,k,l) component
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        self.vec[i * 27 + j * 9 + k * 3 + l]
    }

    /// Sets the (i,j,k,l) component
    pub fn set(&mut self, i: usize, j: usize, k: usize, l: usize, value: f64) {
        self.vec[i * 27 + j * 9 + k * 3 + l] = value;
    }

    /// Allocates the dyadic product of two identity tensors
    ///
    /// ```text
    /// (I ⊗ I)_ijkl = δ_ij δ_kl
    /// ```
    pub fn ii() -> Self {
        let mut ret = Tensor4::new();
        for i in 0..3 {
            for k in 0..3 {
                ret.set(i, i, k, k, 1.0);
            }
        }
        ret
    }

    /// Allocates the fourth-order identity tensor
    ///
    /// With the double contraction convention `(A : B)_ij = A_ijkl B_lk`,
    /// this tensor maps any second-order tensor onto itself:
    ///
    /// ```text
    /// I4_ijkl = δ_il δ_jk
    /// ```
    pub fn i4() -> Self {
        let mut ret = Tensor4::new();
        for i in 0..3 {
            for j in 0..3 {
                ret.set(i, j, j, i, 1.0);
            }
        }
        ret
    }

    /// Allocates the right-transposed fourth-order identity tensor
    ///
    /// Maps any second-order tensor onto its transpose:
    ///
    /// ```text
    /// I4rt_ijkl = δ_ik δ_jl
    /// ```
    pub fn i4_rt() -> Self {
        let mut ret = Tensor4::new();
        for i in 0..3 {
            for j in 0..3 {
                ret.set(i, j, i, j, 1.0);
            }
        }
        ret
    }

    /// Allocates the symmetric projection tensor
    ///
    /// Maps any second-order tensor onto its symmetric part:
    ///
    /// ```text
    /// I4s = (I4 + I4rt) / 2
    /// ```
    pub fn i4_s() -> Self {
        let aa = Tensor4::i4();
        let bb = Tensor4::i4_rt();
        let mut ret = Tensor4::new();
        for p in 0..81 {
            ret.vec[p] = 0.5 * (aa.vec[p] + bb.vec[p]);
        }
        ret
    }

    /// Allocates the symmetric-deviatoric projection tensor
    ///
    /// Maps any second-order tensor onto the deviatoric part of its
    /// symmetric part:
    ///
    /// ```text
    /// I4d = I4s - (I ⊗ I) / 3
    /// ```
    pub fn i4_d() -> Self {
        let mut ret = Tensor4::i4_s();
        let ii = Tensor4::ii();
        for p in 0..81 {
            ret.vec[p] -= ii.vec[p] / 3.0;
        }
        ret
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Tensor4;

    #[test]
    fn new_and_getters_work() {
        let mut dd = Tensor4::new();
        assert_eq!(dd.vec.len(), 81);
        dd.set(1, 2, 0, 1, 8.0);
        assert_eq!(dd.get(1, 2, 0, 1), 8.0);
        assert_eq!(dd.vec[1 * 27 + 2 * 9 + 1], 8.0);
    }

    #[test]
    fn ii_works() {
        let ii = Tensor4::ii();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let correct = if i == j && k == l { 1.0 } else { 0.0 };
                        assert_eq!(ii.get(i, j, k, l), correct);
                    }
                }
            }
        }
    }

    #[test]
    fn i4_and_i4_rt_work() {
        let i4 = Tensor4::i4();
        let rt = Tensor4::i4_rt();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let c4 = if i == l && j == k { 1.0 } else { 0.0 };
                        let crt = if i == k && j == l { 1.0 } else { 0.0 };
                        assert_eq!(i4.get(i, j, k, l), c4);
                        assert_eq!(rt.get(i, j, k, l), crt);
                    }
                }
            }
        }
    }

    #[test]
    fn i4_s_and_i4_d_work() {
        let ss = Tensor4::i4_s();
        let dd = Tensor4::i4_d();
        let i4 = Tensor4::i4();
        let rt = Tensor4::i4_rt();
        let ii = Tensor4::ii();
        for p in 0..81 {
            assert_eq!(ss.vec[p], 0.5 * (i4.vec[p] + rt.vec[p]));
            assert_eq!(dd.vec[p], ss.vec[p] - ii.vec[p] / 3.0);
        }
    }
}
