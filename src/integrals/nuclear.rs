//! Nuclear attraction integrals ⟨χ_a | -Z/|r - C| | χ_b⟩
//!
//! Cook-style A-factor expansion: for each Cartesian direction the
//! (l, r, i) triples of the index iterator contribute
//!
//!   A(l, r, i) = (-1)^(l+i) l! f_l(l₀, l₁, P-A, P-B) ε^(r+i)
//!                (P-C)^(l-2r-2i) / (r! i! (l-2r-2i)!)
//!
//! with ε = 1/(4g), g = α+β. The joint factor is the Boys function of
//! order l+m+n - 2(r+s+t) - (i+j+k) at g|P-C|².

use std::f64::consts::PI;

use crate::error::EngineError;
use crate::integrals::boys::boys;
use crate::integrals::f_coefficient::f_coefficient;
use crate::integrals::nuclear_indices::NuclearIndexIter;
use crate::math::factorial::{factorial, neg_one_pow};
use crate::math::gaussian::{dist_squared, gaussian_norm, gaussian_product};

struct AngularMomenta1d {
    angmom_0: i64,
    angmom_1: i64,
}

struct Positions1d {
    position_0: f64,
    position_1: f64,
    position_nuclear: f64,
    position_product: f64,
}

fn nuclear_a_factor(
    idx_l: i64,
    idx_r: i64,
    idx_i: i64,
    angmoms: &AngularMomenta1d,
    positions: &Positions1d,
    epsilon: f64,
) -> Result<f64, EngineError> {
    let diff_0 = positions.position_product - positions.position_0;
    let diff_1 = positions.position_product - positions.position_1;
    let diff_nuclear = positions.position_product - positions.position_nuclear;
    let idx_n = idx_l - 2 * (idx_r + idx_i);

    let sign = neg_one_pow(idx_l + idx_i);
    let expansion = f_coefficient(idx_l, angmoms.angmom_0, angmoms.angmom_1, diff_0, diff_1)?;
    let epsilon_exponent = epsilon.powi((idx_r + idx_i) as i32);
    let diff_n_exponent = diff_nuclear.powi(idx_n as i32);

    let numerator =
        (sign * factorial(idx_l)) as f64 * expansion * epsilon_exponent * diff_n_exponent;
    let denominator = (factorial(idx_r) * factorial(idx_i) * factorial(idx_n)) as f64;

    Ok(numerator / denominator)
}

/// Normalized nuclear attraction integral between two primitives and
/// one nucleus of charge Z at position_nuclear
pub fn nuclear_attraction_primitive(
    angmom_0: [i64; 3],
    angmom_1: [i64; 3],
    position0: [f64; 3],
    position1: [f64; 3],
    position_nuclear: [f64; 3],
    exponent0: f64,
    exponent1: f64,
    nuclear_charge: f64,
) -> Result<f64, EngineError> {
    let (position_product, coeff_product) =
        gaussian_product(position0, position1, exponent0, exponent1);

    let g_value = exponent0 + exponent1;
    let epsilon = 0.25 / g_value;
    let boys_arg = g_value * dist_squared(position_product, position_nuclear);

    let mut directed_angmoms = Vec::with_capacity(3);
    let mut directed_positions = Vec::with_capacity(3);
    for axis in 0..3 {
        directed_angmoms.push(AngularMomenta1d {
            angmom_0: angmom_0[axis],
            angmom_1: angmom_1[axis],
        });
        directed_positions.push(Positions1d {
            position_0: position0[axis],
            position_1: position1[axis],
            position_nuclear: position_nuclear[axis],
            position_product: position_product[axis],
        });
    }

    let mut integral = 0.0;

    for (idx_l, idx_r, idx_i) in NuclearIndexIter::new(angmom_0[0], angmom_1[0]) {
        let a_factor_x = nuclear_a_factor(
            idx_l,
            idx_r,
            idx_i,
            &directed_angmoms[0],
            &directed_positions[0],
            epsilon,
        )?;

        for (idx_m, idx_s, idx_j) in NuclearIndexIter::new(angmom_0[1], angmom_1[1]) {
            let a_factor_y = nuclear_a_factor(
                idx_m,
                idx_s,
                idx_j,
                &directed_angmoms[1],
                &directed_positions[1],
                epsilon,
            )?;

            for (idx_n, idx_t, idx_k) in NuclearIndexIter::new(angmom_0[2], angmom_1[2]) {
                let a_factor_z = nuclear_a_factor(
                    idx_n,
                    idx_t,
                    idx_k,
                    &directed_angmoms[2],
                    &directed_positions[2],
                    epsilon,
                )?;

                let boys_order =
                    idx_l + idx_m + idx_n - 2 * (idx_r + idx_s + idx_t) - (idx_i + idx_j + idx_k);
                let boys_factor = boys(boys_order, boys_arg)?;

                integral += a_factor_x * a_factor_y * a_factor_z * boys_factor;
            }
        }
    }

    let norm0 = gaussian_norm(angmom_0, exponent0);
    let norm1 = gaussian_norm(angmom_1, exponent1);

    Ok(-(2.0 * PI / g_value) * nuclear_charge * coeff_product * norm0 * norm1 * integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_equal;

    /// ⟨s | -Z/r | s⟩ = -2Z sqrt(2α/π) for a normalized s Gaussian on the nucleus
    #[test]
    fn s_on_nucleus_matches_closed_form() {
        for alpha in [0.5, 1.0, 2.0] {
            let expected = -2.0 * (2.0 * alpha / std::f64::consts::PI).sqrt();
            let value = nuclear_attraction_primitive(
                [0, 0, 0],
                [0, 0, 0],
                [0.0; 3],
                [0.0; 3],
                [0.0; 3],
                alpha,
                alpha,
                1.0,
            )
            .unwrap();
            assert_approx_equal!(value, expected, 1e-10);
        }
    }

    #[test]
    fn vanishes_for_zero_charge() {
        let value = nuclear_attraction_primitive(
            [1, 0, 0],
            [0, 0, 0],
            [0.0; 3],
            [0.0, 0.0, 1.4],
            [0.3, 0.3, 0.3],
            0.9,
            0.5,
            0.0,
        )
        .unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn attraction_is_negative_for_s_pair() {
        let value = nuclear_attraction_primitive(
            [0, 0, 0],
            [0, 0, 0],
            [0.0; 3],
            [0.0, 0.0, 1.4],
            [0.0, 0.0, 0.7],
            3.42525091,
            0.16885540,
            1.0,
        )
        .unwrap();
        assert!(value < 0.0);
    }

    #[test]
    fn symmetric_under_argument_swap() {
        let value01 = nuclear_attraction_primitive(
            [0, 0, 1],
            [0, 0, 0],
            [0.0, 0.0, 0.0],
            [0.0, 0.5, 1.0],
            [0.1, 0.2, 0.3],
            1.2,
            0.4,
            6.0,
        )
        .unwrap();
        let value10 = nuclear_attraction_primitive(
            [0, 0, 0],
            [0, 0, 1],
            [0.0, 0.5, 1.0],
            [0.0, 0.0, 0.0],
            [0.1, 0.2, 0.3],
            0.4,
            1.2,
            6.0,
        )
        .unwrap();

        assert_approx_equal!(value01, value10, 1e-12);
    }
}
