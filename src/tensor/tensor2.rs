/// Holds the components of the second-order identity tensor (Kronecker delta)
pub const IDENTITY2: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Implements a second-order tensor in 3D Cartesian space
///
/// The nine components are stored in row-major order:
///
/// ```text
/// ┌                     ┐
/// │ vec[0] vec[1] vec[2] │
/// │ vec[3] vec[4] vec[5] │
/// │ vec[6] vec[7] vec[8] │
/// └                     ┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tensor2 {
    /// Components in row-major order
    pub vec: [f64; 9],
}

impl Tensor2 {
    /// Allocates a new instance with zeroed components
    pub fn new() -> Self {
        Tensor2 { vec: [0.0; 9] }
    }

    /// Allocates the identity tensor (Kronecker delta)
    pub fn identity() -> Self {
        Tensor2 { vec: IDENTITY2 }
    }

    /// Allocates a new instance given a 3x3 matrix of components
    pub fn from_matrix(a: &[[f64; 3]; 3]) -> Self {
        let mut vec = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                vec[i * 3 + j] = a[i][j];
            }
        }
        Tensor2 { vec }
    }

    /// Returns a 3x3 matrix with the components
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        let mut a = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                a[i][j] = self.vec[i * 3 + j];
            }
        }
        a
    }

    /// Returns the (i,j) component
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.vec[i * 3 + j]
    }

    /// Sets the (i,j) component
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.vec[i * 3 + j] = value;
    }

    /// Computes the trace
    ///
    /// ```text
    /// tr(A) = A_00 + A_11 + A_22
    /// ```
    pub fn trace(&self) -> f64 {
        self.vec[0] + self.vec[4] + self.vec[8]
    }

    /// Returns the symmetric part
    ///
    /// ```text
    /// sym(A) = (A + Aᵀ) / 2
    /// ```
    pub fn sym(&self) -> Tensor2 {
        let mut ret = Tensor2::new();
        for i in 0..3 {
            for j in 0..3 {
                ret.vec[i * 3 + j] = 0.5 * (self.vec[i * 3 + j] + self.vec[j * 3 + i]);
            }
        }
        ret
    }

    /// Returns the deviatoric part
    ///
    /// ```text
    /// dev(A) = A - tr(A)/3 I
    /// ```
    pub fn deviatoric(&self) -> Tensor2 {
        let m = self.trace() / 3.0;
        let mut ret = Tensor2 { vec: self.vec };
        ret.vec[0] -= m;
        ret.vec[4] -= m;
        ret.vec[8] -= m;
        ret
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
