//! Primitive Gaussian functions

/// One primitive in a contraction: coefficient d and exponent α
#[derive(Clone, Copy, Debug)]
pub struct GaussianPrimitive {
    pub coefficient: f64,
    pub exponent: f64,
}

impl GaussianPrimitive {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
}
