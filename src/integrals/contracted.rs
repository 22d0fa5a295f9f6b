//! Integrals between contracted basis functions
//!
//! Implementación por capas: each contracted integral is the sum of the
//! primitive kernel over every combination of primitives, weighted by
//! the product of contraction coefficients.

use crate::basis::contracted::BasisFunction;
use crate::error::EngineError;
use crate::integrals::eri::electron_repulsion_primitive;
use crate::integrals::kinetic::kinetic_primitive;
use crate::integrals::nuclear::nuclear_attraction_primitive;
use crate::integrals::overlap::overlap_primitive;
use crate::system::atom::Atom;

/// ⟨a | b⟩ between contracted functions
pub fn overlap_contracted(
    basis0: &BasisFunction,
    basis1: &BasisFunction,
) -> Result<f64, EngineError> {
    let mut total = 0.0;

    for prim0 in &basis0.primitives {
        for prim1 in &basis1.primitives {
            let coeff = prim0.coefficient * prim1.coefficient;
            total += coeff
                * overlap_primitive(
                    basis0.angular_momentum,
                    basis1.angular_momentum,
                    basis0.centre,
                    basis1.centre,
                    prim0.exponent,
                    prim1.exponent,
                )?;
        }
    }

    Ok(total)
}

/// ⟨a | -∇²/2 | b⟩ between contracted functions
pub fn kinetic_contracted(
    basis0: &BasisFunction,
    basis1: &BasisFunction,
) -> Result<f64, EngineError> {
    let mut total = 0.0;

    for prim0 in &basis0.primitives {
        for prim1 in &basis1.primitives {
            let coeff = prim0.coefficient * prim1.coefficient;
            total += coeff
                * kinetic_primitive(
                    basis0.angular_momentum,
                    basis1.angular_momentum,
                    basis0.centre,
                    basis1.centre,
                    prim0.exponent,
                    prim1.exponent,
                )?;
        }
    }

    Ok(total)
}

/// ⟨a | -Z/|r-C| | b⟩ for one nucleus
pub fn nuclear_attraction_contracted(
    basis0: &BasisFunction,
    basis1: &BasisFunction,
    atom: &Atom,
) -> Result<f64, EngineError> {
    let mut total = 0.0;

    for prim0 in &basis0.primitives {
        for prim1 in &basis1.primitives {
            let coeff = prim0.coefficient * prim1.coefficient;
            total += coeff
                * nuclear_attraction_primitive(
                    basis0.angular_momentum,
                    basis1.angular_momentum,
                    basis0.centre,
                    basis1.centre,
                    atom.position,
                    prim0.exponent,
                    prim1.exponent,
                    atom.nuclear_charge(),
                )?;
        }
    }

    Ok(total)
}

/// (ab|cd) between contracted functions, chemists' notation
pub fn electron_repulsion_contracted(
    basis0: &BasisFunction,
    basis1: &BasisFunction,
    basis2: &BasisFunction,
    basis3: &BasisFunction,
) -> Result<f64, EngineError> {
    let angmoms = [
        basis0.angular_momentum,
        basis1.angular_momentum,
        basis2.angular_momentum,
        basis3.angular_momentum,
    ];
    let positions = [basis0.centre, basis1.centre, basis2.centre, basis3.centre];

    let mut total = 0.0;

    for prim0 in &basis0.primitives {
        for prim1 in &basis1.primitives {
            for prim2 in &basis2.primitives {
                for prim3 in &basis3.primitives {
                    let coeff = prim0.coefficient
                        * prim1.coefficient
                        * prim2.coefficient
                        * prim3.coefficient;
                    total += coeff
                        * electron_repulsion_primitive(
                            angmoms,
                            positions,
                            [
                                prim0.exponent,
                                prim1.exponent,
                                prim2.exponent,
                                prim3.exponent,
                            ],
                        )?;
                }
            }
        }
    }

    Ok(total)
}
