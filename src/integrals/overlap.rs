//! Overlap integrals ⟨χ_a | χ_b⟩ over primitive Cartesian Gaussians
//!
//! The 3-D integral factorizes into three 1-D sums via the Gaussian
//! product theorem. The 1-D factor with angular momenta l₀, l₁ is
//!
//!   Σ_{i₀, i₁, i₀+i₁ even} C(l₀,i₀) C(l₁,i₁) (i₀+i₁-1)!!
//!     (P-A)^(l₀-i₀) (P-B)^(l₁-i₁) / (2(α+β))^((i₀+i₁)/2)
//!
//! A negative angular momentum yields 0, which makes the shifted terms
//! of the kinetic integral drop out correctly at l = 0.

use std::f64::consts::PI;

use crate::error::EngineError;
use crate::math::binomial::binomial;
use crate::math::factorial::double_factorial;
use crate::math::gaussian::{gaussian_norm, gaussian_product};

/// One direction of a primitive Gaussian
#[derive(Clone, Copy, Debug)]
pub struct Gaussian1d {
    pub angmom: i64,
    pub exponent: f64,
    pub centre: f64,
}

/// (π/(α+β))^(3/2), the 3-D Gaussian volume factor
#[inline]
pub fn overlap_norm_3d(exponent0: f64, exponent1: f64) -> f64 {
    let argument = PI / (exponent0 + exponent1);
    (argument * argument * argument).sqrt()
}

/// Unnormalized 1-D overlap about the product centre
pub fn overlap_1d(
    gaussian0: Gaussian1d,
    gaussian1: Gaussian1d,
    centre_product: f64,
) -> Result<f64, EngineError> {
    // neither nested loop would run; the shifted kinetic terms rely on this
    if gaussian0.angmom < 0 || gaussian1.angmom < 0 {
        return Ok(0.0);
    }

    let mut total = 0.0;

    for i0 in 0..=gaussian0.angmom {
        for i1 in 0..=gaussian1.angmom {
            if (i0 + i1) % 2 != 0 {
                continue;
            }

            let choose0 = binomial(gaussian0.angmom, i0)? as f64;
            let choose1 = binomial(gaussian1.angmom, i1)? as f64;
            let factorial_term = double_factorial(i0 + i1 - 1) as f64;

            let contrib0 = (centre_product - gaussian0.centre).powi((gaussian0.angmom - i0) as i32);
            let contrib1 = (centre_product - gaussian1.centre).powi((gaussian1.angmom - i1) as i32);
            let denominator =
                (2.0 * (gaussian0.exponent + gaussian1.exponent)).powi(((i0 + i1) / 2) as i32);

            total += choose0 * choose1 * factorial_term * contrib0 * contrib1 / denominator;
        }
    }

    Ok(total)
}

/// Normalized overlap between two primitive Gaussians
pub fn overlap_primitive(
    angmom_0: [i64; 3],
    angmom_1: [i64; 3],
    position0: [f64; 3],
    position1: [f64; 3],
    exponent0: f64,
    exponent1: f64,
) -> Result<f64, EngineError> {
    let (position_product, coeff_product) =
        gaussian_product(position0, position1, exponent0, exponent1);

    let mut unnormalized = 1.0;
    for axis in 0..3 {
        unnormalized *= overlap_1d(
            Gaussian1d {
                angmom: angmom_0[axis],
                exponent: exponent0,
                centre: position0[axis],
            },
            Gaussian1d {
                angmom: angmom_1[axis],
                exponent: exponent1,
                centre: position1[axis],
            },
            position_product[axis],
        )?;
    }

    let norm0 = gaussian_norm(angmom_0, exponent0);
    let norm1 = gaussian_norm(angmom_1, exponent1);

    Ok(coeff_product * overlap_norm_3d(exponent0, exponent1) * unnormalized * norm0 * norm1)
}
