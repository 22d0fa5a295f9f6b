//! Kinetic energy integrals ⟨χ_a | -∇²/2 | χ_b⟩
//!
//! Differentiating a Cartesian Gaussian along one axis shifts its
//! angular momentum up and down by one, so the kinetic integral along a
//! chosen "main" axis is a combination of four shifted 1-D overlaps:
//!
//!   T = ½ l_a l_b S(l_a-1, l_b-1) - α l_b S(l_a+1, l_b-1)
//!       - l_a β S(l_a-1, l_b+1) + 2αβ S(l_a+1, l_b+1)
//!
//! multiplied by the plain overlaps of the two remaining axes. The full
//! integral sums the three cyclic rotations of (x, y, z). Shifted terms
//! with a negative angular momentum vanish through overlap_1d.

use crate::error::EngineError;
use crate::integrals::overlap::{overlap_1d, overlap_norm_3d, Gaussian1d};
use crate::math::gaussian::{gaussian_norm, gaussian_product};

/// View of one rotation: index 0 is the differentiated axis
#[inline]
fn rotated<T: Copy>(values: [T; 3], main_axis: usize) -> [T; 3] {
    [
        values[main_axis],
        values[(main_axis + 1) % 3],
        values[(main_axis + 2) % 3],
    ]
}

struct Directed1d {
    angmom_a: i64,
    angmom_b: i64,
    position_a: f64,
    position_b: f64,
    centre: f64,
    exponent_a: f64,
    exponent_b: f64,
}

impl Directed1d {
    fn shifted_overlap(&self, shift_a: i64, shift_b: i64) -> Result<f64, EngineError> {
        overlap_1d(
            Gaussian1d {
                angmom: self.angmom_a + shift_a,
                exponent: self.exponent_a,
                centre: self.position_a,
            },
            Gaussian1d {
                angmom: self.angmom_b + shift_b,
                exponent: self.exponent_b,
                centre: self.position_b,
            },
            self.centre,
        )
    }
}

/// Kinetic contribution of one main axis, times the other two overlaps
fn kinetic_1d(
    angmom_a: [i64; 3],
    angmom_b: [i64; 3],
    position_a: [f64; 3],
    position_b: [f64; 3],
    position_centre: [f64; 3],
    exponent_a: f64,
    exponent_b: f64,
) -> Result<f64, EngineError> {
    let main = Directed1d {
        angmom_a: angmom_a[0],
        angmom_b: angmom_b[0],
        position_a: position_a[0],
        position_b: position_b[0],
        centre: position_centre[0],
        exponent_a,
        exponent_b,
    };

    let term_ma_mb =
        0.5 * (angmom_a[0] * angmom_b[0]) as f64 * main.shifted_overlap(-1, -1)?;
    let term_pa_mb = -exponent_a * angmom_b[0] as f64 * main.shifted_overlap(1, -1)?;
    let term_ma_pb = -(angmom_a[0] as f64) * exponent_b * main.shifted_overlap(-1, 1)?;
    let term_pa_pb = 2.0 * exponent_a * exponent_b * main.shifted_overlap(1, 1)?;

    let mut other_overlaps = 1.0;
    for axis in [1, 2] {
        other_overlaps *= overlap_1d(
            Gaussian1d {
                angmom: angmom_a[axis],
                exponent: exponent_a,
                centre: position_a[axis],
            },
            Gaussian1d {
                angmom: angmom_b[axis],
                exponent: exponent_b,
                centre: position_b[axis],
            },
            position_centre[axis],
        )?;
    }

    Ok((term_ma_mb + term_pa_mb + term_ma_pb + term_pa_pb) * other_overlaps)
}

/// Normalized kinetic integral between two primitive Gaussians
pub fn kinetic_primitive(
    angmom_0: [i64; 3],
    angmom_1: [i64; 3],
    position0: [f64; 3],
    position1: [f64; 3],
    exponent0: f64,
    exponent1: f64,
) -> Result<f64, EngineError> {
    let (position_product, coeff_product) =
        gaussian_product(position0, position1, exponent0, exponent1);

    let mut directional_sum = 0.0;
    for main_axis in 0..3 {
        directional_sum += kinetic_1d(
            rotated(angmom_0, main_axis),
            rotated(angmom_1, main_axis),
            rotated(position0, main_axis),
            rotated(position1, main_axis),
            rotated(position_product, main_axis),
            exponent0,
            exponent1,
        )?;
    }

    let norm0 = gaussian_norm(angmom_0, exponent0);
    let norm1 = gaussian_norm(angmom_1, exponent1);

    Ok(coeff_product * overlap_norm_3d(exponent0, exponent1) * directional_sum * norm0 * norm1)
}
