//! Electron-electron repulsion integrals (ij|kl) over primitives
//!
//! Cook-style B-factor expansion. Per Cartesian direction, the
//! five-tuples of the index iterator contribute
//!
//!   B = (-1)^(l01+i) θ01 θ23 K! (P01-P23)^(K-2i)
//!       / (2^(l01+l23+K) δ^(K-i) i! (K-2i)!),  K = l01+l23-2(r01+r23)
//!
//! with θ(l, l₀, l₁, r, g) = f_l(l₀,l₁,·,·) l! g^(r-l) / (r! (l-2r)!)
//! and δ = (1/g01 + 1/g23)/4. The joint factor is the Boys function at
//! |P01-P23|²/(4δ). Directions whose θ-product or separation power
//! falls below 1e-8 contribute nothing and cut the inner loops short.

use std::f64::consts::PI;

use crate::error::EngineError;
use crate::integrals::boys::boys;
use crate::integrals::eri_indices::{EriIndexIter, EriIndices};
use crate::integrals::f_coefficient::f_coefficient;
use crate::math::factorial::{factorial, neg_one_pow};
use crate::math::gaussian::{dist_squared, gaussian_norm, gaussian_product};

const B_FACTOR_SMALL_TOLERANCE: f64 = 1.0e-8;

struct AngularMomenta1d {
    angmom_0: i64,
    angmom_1: i64,
    angmom_2: i64,
    angmom_3: i64,
}

struct PositionDifferences1d {
    diff_0: f64,
    diff_1: f64,
    diff_2: f64,
    diff_3: f64,
    diff_product: f64,
}

struct ExponentInfo {
    g_value_01: f64,
    g_value_23: f64,
    delta: f64,
}

fn theta_factor(
    idx_ltot: i64,
    idx_l0: i64,
    idx_l1: i64,
    idx_r: i64,
    separation0: f64,
    separation1: f64,
    gauss_exponent: f64,
) -> Result<f64, EngineError> {
    let f_factor = f_coefficient(idx_ltot, idx_l0, idx_l1, separation0, separation1)?;
    let ltot_fact = factorial(idx_ltot) as f64;
    let r_fact = factorial(idx_r) as f64;
    let ltot_r_fact = factorial(idx_ltot - 2 * idx_r) as f64;
    let expon = gauss_exponent.powi((idx_r - idx_ltot) as i32);

    Ok(f_factor * ltot_fact * expon / (r_fact * ltot_r_fact))
}

/// One direction's B-factor; None means the contribution is negligible
/// and the caller may skip ahead
fn b_factor(
    indices: &EriIndices,
    angmoms: &AngularMomenta1d,
    differences: &PositionDifferences1d,
    info: &ExponentInfo,
) -> Result<Option<f64>, EngineError> {
    let idx_k = indices.idx_l_01 + indices.idx_l_23 - 2 * (indices.idx_r_01 + indices.idx_r_23);

    let theta01 = theta_factor(
        indices.idx_l_01,
        angmoms.angmom_0,
        angmoms.angmom_1,
        indices.idx_r_01,
        differences.diff_0,
        differences.diff_1,
        info.g_value_01,
    )?;
    if theta01.abs() < B_FACTOR_SMALL_TOLERANCE {
        return Ok(None);
    }

    let theta23 = theta_factor(
        indices.idx_l_23,
        angmoms.angmom_2,
        angmoms.angmom_3,
        indices.idx_r_23,
        differences.diff_2,
        differences.diff_3,
        info.g_value_23,
    )?;
    if theta23.abs() < B_FACTOR_SMALL_TOLERANCE {
        return Ok(None);
    }

    let expon_position = differences.diff_product.powi((idx_k - 2 * indices.idx_i) as i32);
    if expon_position.abs() < B_FACTOR_SMALL_TOLERANCE {
        return Ok(None);
    }

    let sign = neg_one_pow(indices.idx_l_01 + indices.idx_i) as f64;
    let k_factorial = factorial(idx_k) as f64;

    let i_factorial = factorial(indices.idx_i) as f64;
    let k2i_factorial = factorial(idx_k - 2 * indices.idx_i) as f64;
    let delta_factor = info.delta.powi((idx_k - indices.idx_i) as i32);
    let pow2_factor = 2.0_f64.powi((idx_k + indices.idx_l_01 + indices.idx_l_23) as i32);

    let numerator = sign * theta01 * theta23 * k_factorial * expon_position;
    let denominator = pow2_factor * delta_factor * i_factorial * k2i_factorial;

    Ok(Some(numerator / denominator))
}

fn boys_order(indices_x: &EriIndices, indices_y: &EriIndices, indices_z: &EriIndices) -> i64 {
    let idx_l_sum = indices_x.idx_l_01 + indices_x.idx_l_23
        + indices_y.idx_l_01 + indices_y.idx_l_23
        + indices_z.idx_l_01 + indices_z.idx_l_23;

    let idx_r_sum = indices_x.idx_r_01 + indices_x.idx_r_23
        + indices_y.idx_r_01 + indices_y.idx_r_23
        + indices_z.idx_r_01 + indices_z.idx_r_23;

    let idx_i_sum = indices_x.idx_i + indices_y.idx_i + indices_z.idx_i;

    idx_l_sum - 2 * idx_r_sum - idx_i_sum
}

/// Normalized two-electron repulsion integral over four primitives,
/// in chemists' notation (01|23)
pub fn electron_repulsion_primitive(
    angmoms: [[i64; 3]; 4],
    positions: [[f64; 3]; 4],
    exponents: [f64; 4],
) -> Result<f64, EngineError> {
    let (position_product_01, coeff_product_01) =
        gaussian_product(positions[0], positions[1], exponents[0], exponents[1]);
    let (position_product_23, coeff_product_23) =
        gaussian_product(positions[2], positions[3], exponents[2], exponents[3]);

    let g_value_01 = exponents[0] + exponents[1];
    let g_value_23 = exponents[2] + exponents[3];
    let delta = 0.25 * (1.0 / g_value_01 + 1.0 / g_value_23);
    let info = ExponentInfo {
        g_value_01,
        g_value_23,
        delta,
    };

    let boys_arg = 0.25 * dist_squared(position_product_01, position_product_23) / delta;

    let mut directed_angmoms = Vec::with_capacity(3);
    let mut directed_differences = Vec::with_capacity(3);
    for axis in 0..3 {
        directed_angmoms.push(AngularMomenta1d {
            angmom_0: angmoms[0][axis],
            angmom_1: angmoms[1][axis],
            angmom_2: angmoms[2][axis],
            angmom_3: angmoms[3][axis],
        });
        directed_differences.push(PositionDifferences1d {
            diff_0: position_product_01[axis] - positions[0][axis],
            diff_1: position_product_01[axis] - positions[1][axis],
            diff_2: position_product_23[axis] - positions[2][axis],
            diff_3: position_product_23[axis] - positions[3][axis],
            diff_product: position_product_01[axis] - position_product_23[axis],
        });
    }

    let x_iter = EriIndexIter::new(
        angmoms[0][0],
        angmoms[1][0],
        angmoms[2][0],
        angmoms[3][0],
    );

    let mut integral = 0.0;

    for indices_x in x_iter {
        let Some(b_factor_x) = b_factor(
            &indices_x,
            &directed_angmoms[0],
            &directed_differences[0],
            &info,
        )?
        else {
            continue;
        };

        let y_iter = EriIndexIter::new(
            angmoms[0][1],
            angmoms[1][1],
            angmoms[2][1],
            angmoms[3][1],
        );

        for indices_y in y_iter {
            let Some(b_factor_y) = b_factor(
                &indices_y,
                &directed_angmoms[1],
                &directed_differences[1],
                &info,
            )?
            else {
                continue;
            };

            let z_iter = EriIndexIter::new(
                angmoms[0][2],
                angmoms[1][2],
                angmoms[2][2],
                angmoms[3][2],
            );

            for indices_z in z_iter {
                let Some(b_factor_z) = b_factor(
                    &indices_z,
                    &directed_angmoms[2],
                    &directed_differences[2],
                    &info,
                )?
                else {
                    continue;
                };

                let boys_factor = boys(boys_order(&indices_x, &indices_y, &indices_z), boys_arg)?;
                integral += b_factor_x * b_factor_y * b_factor_z * boys_factor;
            }
        }
    }

    let norm_total = gaussian_norm(angmoms[0], exponents[0])
        * gaussian_norm(angmoms[1], exponents[1])
        * gaussian_norm(angmoms[2], exponents[2])
        * gaussian_norm(angmoms[3], exponents[3]);
    let coeff_total = coeff_product_01 * coeff_product_23;
    let expon_total =
        2.0 * PI * PI / (g_value_01 * g_value_23) * (PI / (g_value_01 + g_value_23)).sqrt();

    Ok(integral * coeff_total * norm_total * expon_total)
}
