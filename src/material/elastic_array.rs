use super::{Elastic, ParamElastic};
use crate::StrError;
use rayon::prelude::*;

/// Implements a batched array of isotropic linear elastic material points
///
/// The array spans an arbitrary N-dimensional grid (e.g., elements times
/// integration points); each point carries its own `(K, G)` pair assigned
/// via boolean index masks. Flat row-major storage is used throughout:
/// masks and energies have one entry per point, strain/stress arrays hold
/// 9 components per point, and tangent arrays hold 81 components per point.
///
/// Every point must be assigned exactly one model before strain can be set
/// or results can be evaluated; [`ElasticArray::check`] verifies this.
/// Overlapping masks are not rejected: the last assignment wins, which is
/// a usage error the caller is responsible for avoiding.
///
/// Evaluation is an elementwise map with no cross-point dependency and is
/// performed in parallel.
pub struct ElasticArray {
    /// Grid shape (ordered sequence of positive dimension sizes)
    shape: Vec<usize>,

    /// Total number of points (product of the shape dimensions)
    size: usize,

    /// Per-point models in row-major order (None = unassigned)
    models: Vec<Option<Elastic>>,
}

impl ElasticArray {
    /// Allocates a new instance with all points unassigned
    pub fn new(shape: &[usize]) -> Result<Self, StrError> {
        if shape.is_empty() {
            return Err("shape must have at least one dimension");
        }
        if shape.iter().any(|dim| *dim == 0) {
            return Err("shape dimensions must be positive");
        }
        let size = shape.iter().product();
        let mut models = Vec::with_capacity(size);
        models.resize_with(size, || None);
        Ok(ElasticArray {
            shape: shape.to_vec(),
            size,
            models,
        })
    }

    /// Allocates a new instance with every point assigned the same model
    pub fn new_uniform(shape: &[usize], bulk: f64, shear: f64) -> Result<Self, StrError> {
        let mut array = ElasticArray::new(shape)?;
        let param = ParamElastic::new(bulk, shear)?;
        for model in array.models.iter_mut() {
            *model = Some(Elastic::from_param(&param));
        }
        Ok(array)
    }

    /// Returns the grid shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the total number of points
    pub fn size(&self) -> usize {
        self.size
    }

    /// Assigns the same model to every point flagged by the mask
    ///
    /// The mask must have one entry per point (row-major order over the
    /// grid shape).
    pub fn set_elastic(&mut self, mask: &[bool], bulk: f64, shear: f64) -> Result<(), StrError> {
        if mask.len() != self.size {
            return Err("mask length must equal the number of material points");
        }
        let param = ParamElastic::new(bulk, shear)?;
        for (model, flag) in self.models.iter_mut().zip(mask) {
            if *flag {
                *model = Some(Elastic::from_param(&param));
            }
        }
        Ok(())
    }

    /// Assigns per-point moduli to every point flagged by the mask
    ///
    /// The mask and both parameter arrays must have one entry per point
    /// (row-major order over the grid shape).
    pub fn set_elastic_array(
        &mut self,
        mask: &[bool],
        bulk: &[f64],
        shear: &[f64],
    ) -> Result<(), StrError> {
        if mask.len() != self.size {
            return Err("mask length must equal the number of material points");
        }
        if bulk.len() != self.size || shear.len() != self.size {
            return Err("parameter array length must equal the number of material points");
        }
        for i in 0..self.size {
            if mask[i] {
                let param = ParamElastic::new(bulk[i], shear[i])?;
                self.models[i] = Some(Elastic::from_param(&param));
            }
        }
        Ok(())
    }

    /// Verifies that every point has an assigned model
    pub fn check(&self) -> Result<(), StrError> {
        if self.models.iter().any(|model| model.is_none()) {
            return Err("material points without an assigned model found");
        }
        Ok(())
    }

    /// Returns a flag per point indicating whether a model is assigned
    pub fn is_assigned(&self) -> Vec<bool> {
        self.models.iter().map(|model| model.is_some()).collect()
    }

    /// Returns the bulk modulus of every point
    pub fn bulk_array(&self) -> Result<Vec<f64>, StrError> {
        self.check()?;
        Ok(self
            .models
            .iter()
            .map(|model| match model {
                Some(m) => m.bulk(),
                None => 0.0,
            })
            .collect())
    }

    /// Returns the shear modulus of every point
    pub fn shear_array(&self) -> Result<Vec<f64>, StrError> {
        self.check()?;
        Ok(self
            .models
            .iter()
            .map(|model| match model {
                Some(m) => m.shear(),
                None => 0.0,
            })
            .collect())
    }

    /// Returns a reference to the model at the given grid index
    pub fn get_model(&self, index: &[usize]) -> Result<&Elastic, StrError> {
        if index.len() != self.shape.len() {
            return Err("index rank must match the shape");
        }
        let mut flat = 0;
        for (pos, dim) in index.iter().zip(&self.shape) {
            if *pos >= *dim {
                return Err("index is out of bounds");
            }
            flat = flat * dim + pos;
        }
        match &self.models[flat] {
            Some(m) => Ok(m),
            None => Err("material points without an assigned model found"),
        }
    }

    /// Sets the strain of every point and updates all stresses
    ///
    /// The input must hold 9 components per point, i.e., an array shaped
    /// `(shape..., 3, 3)` in row-major order. Each 3x3 block is
    /// symmetrized on the way in. Requires all points to be assigned.
    pub fn set_strain(&mut self, eps: &[f64]) -> Result<(), StrError> {
        self.check()?;
        if eps.len() != self.size * 9 {
            return Err("strain array length must equal the number of points times 9");
        }
        self.models
            .par_iter_mut()
            .zip(eps.par_chunks(9))
            .for_each(|(model, chunk)| {
                if let Some(m) = model {
                    m.update_strain_slice(chunk);
                }
            });
        Ok(())
    }

    /// Copies the current (symmetrized) strain of every point
    ///
    /// The destination must hold 9 components per point.
    pub fn strain_into(&self, ret: &mut [f64]) -> Result<(), StrError> {
        self.check()?;
        if ret.len() != self.size * 9 {
            return Err("strain array length must equal the number of points times 9");
        }
        ret.par_chunks_mut(9)
            .zip(self.models.par_iter())
            .for_each(|(chunk, model)| {
                if let Some(m) = model {
                    chunk.copy_from_slice(&m.strain().vec);
                }
            });
        Ok(())
    }

    /// Copies the stress of every point for the current strain
    ///
    /// The destination must hold 9 components per point.
    pub fn stress_into(&self, ret: &mut [f64]) -> Result<(), StrError> {
        self.check()?;
        if ret.len() != self.size * 9 {
            return Err("stress array length must equal the number of points times 9");
        }
        ret.par_chunks_mut(9)
            .zip(self.models.par_iter())
            .for_each(|(chunk, model)| {
                if let Some(m) = model {
                    chunk.copy_from_slice(&m.stress().vec);
                }
            });
        Ok(())
    }

    /// Copies the tangent stiffness of every point
    ///
    /// The destination must hold 81 components per point, i.e., an array
    /// shaped `(shape..., 3, 3, 3, 3)`.
    pub fn tangent_into(&self, ret: &mut [f64]) -> Result<(), StrError> {
        self.check()?;
        if ret.len() != self.size * 81 {
            return Err("tangent array length must equal the number of points times 81");
        }
        ret.par_chunks_mut(81)
            .zip(self.models.par_iter())
            .for_each(|(chunk, model)| {
                if let Some(m) = model {
                    chunk.copy_from_slice(&m.tangent().vec);
                }
            });
        Ok(())
    }

    /// Copies the strain energy density of every point
    ///
    /// The destination must hold one value per point.
    pub fn energy_into(&self, ret: &mut [f64]) -> Result<(), StrError> {
        self.check()?;
        if ret.len() != self.size {
            return Err("energy array length must equal the number of points");
        }
        ret.par_iter_mut()
            .zip(self.models.par_iter())
            .for_each(|(value, model)| {
                if let Some(m) = model {
                    *value = m.energy();
                }
            });
        Ok(())
    }

    /// Returns the current (symmetrized) strain of every point
    pub fn strain(&self) -> Result<Vec<f64>, StrError> {
        let mut ret = vec![0.0; self.size * 9];
        self.strain_into(&mut ret)?;
        Ok(ret)
    }

    /// Returns the stress of every point for the current strain
    pub fn stress(&self) -> Result<Vec<f64>, StrError> {
        let mut ret = vec![0.0; self.size * 9];
        self.stress_into(&mut ret)?;
        Ok(ret)
    }

    /// Returns the tangent stiffness of every point
    pub fn tangent(&self) -> Result<Vec<f64>, StrError> {
        let mut ret = vec![0.0; self.size * 81];
        self.tangent_into(&mut ret)?;
        Ok(ret)
    }

    /// Returns the strain energy density of every point
    pub fn energy(&self) -> Result<Vec<f64>, StrError> {
        let mut ret = vec![0.0; self.size];
        self.energy_into(&mut ret)?;
        Ok(ret)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
