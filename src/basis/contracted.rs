//! Contracted basis function (atomic orbital)
//!
//! A finite linear combination of primitive Gaussians sharing one
//! centre and one Cartesian angular momentum triple. Angular momenta
//! are signed because the kernel formulas subtract from them.

use crate::basis::primitive::GaussianPrimitive;
use crate::error::EngineError;
use crate::math::binomial::BINOMIAL_TABLE_BOUND;

#[derive(Clone, Debug)]
pub struct BasisFunction {
    /// Index of the owning atom
    pub atom_index: usize,

    /// Centre shared by all primitives, in Bohr
    pub centre: [f64; 3],

    /// (lx, ly, lz)
    pub angular_momentum: [i64; 3],

    /// Contraction primitives (non-empty)
    pub primitives: Vec<GaussianPrimitive>,
}

impl BasisFunction {
    pub fn new(
        atom_index: usize,
        centre: [f64; 3],
        angular_momentum: [i64; 3],
        primitives: Vec<GaussianPrimitive>,
    ) -> Self {
        Self {
            atom_index,
            centre,
            angular_momentum,
            primitives,
        }
    }

    #[inline]
    pub fn total_angular_momentum(&self) -> i64 {
        self.angular_momentum[0] + self.angular_momentum[1] + self.angular_momentum[2]
    }

    /// Check the invariants the integral kernels rely on
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.primitives.is_empty() {
            return Err(EngineError::Config {
                context: format!(
                    "basis function on atom {} has no primitives",
                    self.atom_index
                ),
            });
        }

        if self.angular_momentum.iter().any(|&l| l < 0)
            || self.total_angular_momentum() > BINOMIAL_TABLE_BOUND
        {
            return Err(EngineError::Domain {
                context: format!(
                    "angular momentum {:?} on atom {} outside the supported range",
                    self.angular_momentum, self.atom_index
                ),
            });
        }

        if self.centre.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::Domain {
                context: format!("non-finite centre on atom {}", self.atom_index),
            });
        }

        for primitive in &self.primitives {
            if !(primitive.exponent > 0.0) || !primitive.exponent.is_finite() {
                return Err(EngineError::Domain {
                    context: format!(
                        "non-positive Gaussian exponent {} on atom {}",
                        primitive.exponent, self.atom_index
                    ),
                });
            }
            if !primitive.coefficient.is_finite() {
                return Err(EngineError::Domain {
                    context: format!(
                        "non-finite contraction coefficient on atom {}",
                        self.atom_index
                    ),
                });
            }
        }

        Ok(())
    }
}
