//! Gaussian product rule and Cartesian Gaussian normalization
//!
//! The product of two Gaussians is a Gaussian on a new centre:
//!   P = (α A + β B) / (α + β),  scalar = exp(-αβ |A-B|² / (α+β))
//!
//! Contraction coefficients are NOT folded in here; the contraction
//! layer multiplies them once per primitive pair.

use std::f64::consts::PI;

use crate::math::factorial::double_factorial;

/// |A - B|²
#[inline]
pub fn dist_squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Product of two unit-coefficient Gaussians.
///
/// Returns the new centre and the scalar prefactor; the combined
/// exponent is α + β.
pub fn gaussian_product(
    centre0: [f64; 3],
    centre1: [f64; 3],
    exponent0: f64,
    exponent1: f64,
) -> ([f64; 3], f64) {
    let g = exponent0 + exponent1;

    let centre = [
        (exponent0 * centre0[0] + exponent1 * centre1[0]) / g,
        (exponent0 * centre0[1] + exponent1 * centre1[1]) / g,
        (exponent0 * centre0[2] + exponent1 * centre1[2]) / g,
    ];

    let scaling = -exponent0 * exponent1 / g;
    let coefficient = (scaling * dist_squared(centre0, centre1)).exp();

    (centre, coefficient)
}

/// Normalization constant of a primitive Cartesian Gaussian
///
/// N = (2α/π)^(3/4) * (4α)^((lx+ly+lz)/2) / sqrt((2lx-1)!! (2ly-1)!! (2lz-1)!!)
///
/// The (-1)!! = 1 convention makes each l = 0 component contribute 1.
pub fn gaussian_norm(angular_momentum: [i64; 3], exponent: f64) -> f64 {
    let total = (angular_momentum[0] + angular_momentum[1] + angular_momentum[2]) as f64;

    let gauss1d_component = (2.0 * exponent / PI).powf(0.75);
    let angmom_numerator = (4.0 * exponent).powf(0.5 * total);

    let denom_x = double_factorial(2 * angular_momentum[0] - 1) as f64;
    let denom_y = double_factorial(2 * angular_momentum[1] - 1) as f64;
    let denom_z = double_factorial(2 * angular_momentum[2] - 1) as f64;
    let angmom_denominator = (denom_x * denom_y * denom_z).sqrt();

    gauss1d_component * angmom_numerator / angmom_denominator
}
