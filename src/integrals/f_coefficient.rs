//! Expansion coefficient f_j(l, m, a, b)
//!
//! The coefficient of x^j in the product (x + a)^l (x + b)^m:
//!
//!   f_j = Σ_k C(l, k) C(m, j-k) a^(l-k) b^(m-j+k),
//!   k ∈ [max(0, j-m), min(j, l)]
//!
//! Every integral kernel expands its polynomial prefactors through this.

use crate::error::EngineError;
use crate::math::binomial::binomial;

pub fn f_coefficient(
    index_j: i64,
    angmom_l: i64,
    angmom_m: i64,
    separation0: f64,
    separation1: f64,
) -> Result<f64, EngineError> {
    let lower = if index_j > angmom_m {
        index_j - angmom_m
    } else {
        0
    };
    let upper = index_j.min(angmom_l);

    let mut result = 0.0;

    for k in lower..=upper {
        let binom0 = binomial(angmom_l, k)? as f64;
        let binom1 = binomial(angmom_m, index_j - k)? as f64;

        let coeff0 = separation0.powi((angmom_l - k) as i32);
        let coeff1 = separation1.powi((angmom_m - index_j + k) as i32);

        result += binom0 * binom1 * coeff0 * coeff1;
    }

    Ok(result)
}
