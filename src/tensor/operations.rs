use super::{Tensor2, Tensor4};

/// Performs the double contraction between two second-order tensors
///
/// ```text
/// s = A : B = Σ_ij A_ij B_ji
/// ```
pub fn t2_ddot_t2(a: &Tensor2, b: &Tensor2) -> f64 {
    let mut s = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            s += a.get(i, j) * b.get(j, i);
        }
    }
    s
}

/// Performs the double contraction between a fourth- and a second-order tensor
///
/// Contracts the last two indices of `A` with `B`:
///
/// ```text
/// C_ij = (A : B)_ij = Σ_kl A_ijkl B_lk
/// ```
pub fn t4_ddot_t2(cc: &mut Tensor2, aa: &Tensor4, b: &Tensor2) {
    for i in 0..3 {
        for j in 0..3 {
            let mut s = 0.0;
            for k in 0..3 {
                for l in 0..3 {
                    s += aa.get(i, j, k, l) * b.get(l, k);
                }
            }
            cc.set(i, j, s);
        }
    }
}

/// Performs the dyadic product between two second-order tensors
///
/// ```text
/// (A ⊗ B)_ijkl = A_ij B_kl
/// ```
pub fn t2_dyad_t2(dd: &mut Tensor4, a: &Tensor2, b: &Tensor2) {
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    dd.set(i, j, k, l, a.get(i, j) * b.get(k, l));
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
