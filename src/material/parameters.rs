use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the isotropic linear elastic model
///
/// The law is physically meaningful only for positive moduli; thus the
/// constructor rejects non-positive values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamElastic {
    /// Bulk modulus K
    pub bulk: f64,

    /// Shear modulus G
    pub shear: f64,
}

impl ParamElastic {
    /// Allocates a new instance with validated moduli
    pub fn new(bulk: f64, shear: f64) -> Result<Self, StrError> {
        if bulk <= 0.0 {
            return Err("bulk modulus must be positive");
        }
        if shear <= 0.0 {
            return Err("shear modulus must be positive");
        }
        Ok(ParamElastic { bulk, shear })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
