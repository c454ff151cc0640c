use super::{t2_ddot_t2, Tensor2};
use crate::StrError;

/// Computes the hydrostatic invariant (mean of the diagonal)
///
/// ```text
/// m = tr(A) / 3
/// ```
pub fn hydrostatic(a: &Tensor2) -> f64 {
    a.trace() / 3.0
}

/// Computes the equivalent scalar of the deviatoric part
///
/// ```text
/// eq = sqrt(c · dev(A) : dev(A))
/// ```
///
/// The coefficient `c` selects the convention: 2/3 for strain-type
/// equivalence and 3/2 for stress-type (von Mises) equivalence.
pub fn equiv_deviatoric(a: &Tensor2, coefficient: f64) -> f64 {
    let d = a.deviatoric();
    f64::sqrt(coefficient * t2_ddot_t2(&d, &d))
}

/// Computes the equivalent (deviatoric) strain invariant
///
/// ```text
/// εd = sqrt(2/3 · dev(ε) : dev(ε))
/// ```
pub fn invariant_eps_d(eps: &Tensor2) -> f64 {
    equiv_deviatoric(eps, 2.0 / 3.0)
}

/// Computes the equivalent von Mises stress invariant
///
/// ```text
/// σd = sqrt(3/2 · dev(σ) : dev(σ))
/// ```
pub fn invariant_sigma_d(sig: &Tensor2) -> f64 {
    equiv_deviatoric(sig, 3.0 / 2.0)
}

/// Computes the equivalent strain invariant for a flat array of tensors
///
/// The input holds n tensors of 9 components each in row-major order,
/// i.e., an array shaped `(n, 3, 3)`; the output has length n.
pub fn invariant_eps_d_array(eps: &[f64]) -> Result<Vec<f64>, StrError> {
    map_tensor_array(eps, invariant_eps_d)
}

/// Computes the von Mises stress invariant for a flat array of tensors
///
/// The input holds n tensors of 9 components each in row-major order,
/// i.e., an array shaped `(n, 3, 3)`; the output has length n.
pub fn invariant_sigma_d_array(sig: &[f64]) -> Result<Vec<f64>, StrError> {
    map_tensor_array(sig, invariant_sigma_d)
}

/// Applies a scalar invariant to every 9-component block of a flat array
fn map_tensor_array(a: &[f64], f: fn(&Tensor2) -> f64) -> Result<Vec<f64>, StrError> {
    if a.len() % 9 != 0 {
        return Err("tensor array length must be a multiple of 9");
    }
    let ret = a
        .chunks_exact(9)
        .map(|chunk| {
            let mut t = Tensor2::new();
            t.vec.copy_from_slice(chunk);
            f(&t)
        })
        .collect();
    Ok(ret)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{
        equiv_deviatoric, hydrostatic, invariant_eps_d, invariant_eps_d_array, invariant_sigma_d,
        invariant_sigma_d_array,
    };
    use crate::tensor::Tensor2;
    use russell_chk::{assert_approx_eq, assert_vec_approx_eq};

    #[test]
    fn hydrostatic_works() {
        let a = Tensor2::from_matrix(&[
            [1.0, 0.0, 0.0], //
            [0.0, 2.0, 0.0], //
            [0.0, 0.0, 6.0],
        ]);
        assert_approx_eq!(hydrostatic(&a), 3.0, 1e-15);
    }

    #[test]
    fn equivalent_invariants_of_pure_shear_work() {
        // unit shear: ε_01 = ε_10 = 1
        let a = Tensor2::from_matrix(&[
            [0.0, 1.0, 0.0], //
            [1.0, 0.0, 0.0], //
            [0.0, 0.0, 0.0],
        ]);
        assert_approx_eq!(invariant_eps_d(&a), 2.0 / f64::sqrt(3.0), 1e-15);
        assert_approx_eq!(invariant_sigma_d(&a), f64::sqrt(3.0), 1e-15);
    }

    #[test]
    fn equivalent_invariants_ignore_hydrostatic_part() {
        let a = Tensor2::from_matrix(&[
            [4.0, 1.0, 0.0], //
            [1.0, 4.0, 0.0], //
            [0.0, 0.0, 4.0],
        ]);
        let b = Tensor2::from_matrix(&[
            [0.0, 1.0, 0.0], //
            [1.0, 0.0, 0.0], //
            [0.0, 0.0, 0.0],
        ]);
        assert_approx_eq!(invariant_eps_d(&a), invariant_eps_d(&b), 1e-15);
        assert_approx_eq!(invariant_sigma_d(&a), invariant_sigma_d(&b), 1e-15);
    }

    #[test]
    fn equivalent_invariants_are_frame_indifferent() {
        // rotation of 30 degrees about the z axis
        let (s, c) = f64::sin_cos(30.0 * std::f64::consts::PI / 180.0);
        let r = [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]];
        let a = Tensor2::from_matrix(&[
            [0.12, 0.02, 0.00], //
            [0.02, 0.15, 0.03], //
            [0.00, 0.03, 0.20],
        ]);
        // A' = R A Rᵀ
        let mut rot = Tensor2::new();
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for p in 0..3 {
                    for q in 0..3 {
                        sum += r[i][p] * a.get(p, q) * r[j][q];
                    }
                }
                rot.set(i, j, sum);
            }
        }
        assert_approx_eq!(invariant_eps_d(&rot), invariant_eps_d(&a), 1e-15);
        assert_approx_eq!(invariant_sigma_d(&rot), invariant_sigma_d(&a), 1e-15);
        assert_approx_eq!(hydrostatic(&rot), hydrostatic(&a), 1e-15);
    }

    #[test]
    fn equiv_deviatoric_coefficient_works() {
        let a = Tensor2::from_matrix(&[
            [0.0, 2.0, 0.0], //
            [2.0, 0.0, 0.0], //
            [0.0, 0.0, 0.0],
        ]);
        // dev(A) : dev(A) = 8
        assert_approx_eq!(equiv_deviatoric(&a, 0.5), 2.0, 1e-15);
    }

    #[test]
    fn batched_invariants_work() {
        // two points with unit shear
        #[rustfmt::skip]
        let a = [
            0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, 0.0,
            0.0, 1.0, 0.0,  1.0, 0.0, 0.0,  0.0, 0.0, 0.0,
        ];
        let eq = invariant_eps_d_array(&a).unwrap();
        let correct = 2.0 / f64::sqrt(3.0);
        assert_vec_approx_eq!(eq, [correct, correct], 1e-15);
        let sq = invariant_sigma_d_array(&a).unwrap();
        let correct = f64::sqrt(3.0);
        assert_vec_approx_eq!(sq, [correct, correct], 1e-15);
    }

    #[test]
    fn batched_invariants_capture_errors() {
        assert_eq!(
            invariant_eps_d_array(&[1.0, 2.0]).err(),
            Some("tensor array length must be a multiple of 9")
        );
        assert_eq!(
            invariant_sigma_d_array(&[0.0; 10]).err(),
            Some("tensor array length must be a multiple of 9")
        );
    }
}
