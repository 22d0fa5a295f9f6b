//! Binomial coefficients from a precomputed Pascal table
//!
//! Angular momenta stay small in electronic structure theory; a small
//! precomputed grid is faster than a recursive equation and bounds the
//! angular momenta the integral formulas accept.

use crate::error::EngineError;

/// Largest n (and k) the table covers
pub const BINOMIAL_TABLE_BOUND: i64 = 10;

#[rustfmt::skip]
const BINOMIAL_TABLE: [[i64; 11]; 11] = [
    [1,  0,  0,   0,   0,   0,   0,   0,  0,  0, 0],
    [1,  1,  0,   0,   0,   0,   0,   0,  0,  0, 0],
    [1,  2,  1,   0,   0,   0,   0,   0,  0,  0, 0],
    [1,  3,  3,   1,   0,   0,   0,   0,  0,  0, 0],
    [1,  4,  6,   4,   1,   0,   0,   0,  0,  0, 0],
    [1,  5, 10,  10,   5,   1,   0,   0,  0,  0, 0],
    [1,  6, 15,  20,  15,   6,   1,   0,  0,  0, 0],
    [1,  7, 21,  35,  35,  21,   7,   1,  0,  0, 0],
    [1,  8, 28,  56,  70,  56,  28,   8,  1,  0, 0],
    [1,  9, 36,  84, 126, 126,  84,  36,  9,  1, 0],
    [1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1],
];

/// C(n, k) from the table; indices outside [0, 10] are a range error
pub fn binomial(n: i64, k: i64) -> Result<i64, EngineError> {
    if n < 0 || k < 0 || n > BINOMIAL_TABLE_BOUND || k > BINOMIAL_TABLE_BOUND {
        return Err(EngineError::Range {
            context: format!("binomial C({n}, {k}) outside the precomputed table"),
        });
    }

    Ok(BINOMIAL_TABLE[n as usize][k as usize])
}
