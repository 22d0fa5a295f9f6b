//! Error kinds surfaced by the engine
//!
//! Integral kernels perform no local recovery: the first offending
//! condition propagates to the SCF driver, which itself only adds the
//! non-convergence case.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Input outside the declared ranges (Boys order, exponents, electron count).
    #[error("domain error: {context}")]
    Domain { context: String },

    /// Lookup outside a precomputed table.
    #[error("table index out of range: {context}")]
    Range { context: String },

    /// Eigendecomposition failure or a non-finite matrix element.
    #[error("numerical failure: {context}")]
    Numeric { context: String },

    /// SCF exhausted its iteration budget with the density still changing.
    #[error(
        "SCF did not converge after {iterations} iterations \
         (density change {delta:.3e}, tolerance {tolerance:.3e})"
    )]
    NonConvergence {
        iterations: usize,
        delta: f64,
        tolerance: f64,
    },

    /// Inconsistent input: unknown element, missing basis parameters, bad file.
    #[error("configuration error: {context}")]
    Config { context: String },
}
