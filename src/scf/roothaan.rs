//! Roothaan step: diagonalise the Fock matrix in the orthonormal basis
//!
//! F' = Xᵀ F X is an ordinary symmetric eigenproblem. Later stages read
//! the eigenstates in ascending energy order, so the eigenpairs are
//! reordered before back-transforming C = X C'.

use std::cmp::Ordering;

use nalgebra::{DMatrix, SymmetricEigen};

use crate::error::EngineError;

/// Indices that would sort `values` ascending; stable on ties
pub fn sorted_indices(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i0, &i1| {
        values[i0]
            .partial_cmp(&values[i1])
            .unwrap_or(Ordering::Equal)
    });

    indices
}

/// Solve F C = S C ε through the transformation matrix X
///
/// Returns the back-transformed coefficient matrix and the orbital
/// energies in ascending order.
pub fn solve_roothaan(
    fock: &DMatrix<f64>,
    transformation: &DMatrix<f64>,
) -> Result<(DMatrix<f64>, Vec<f64>), EngineError> {
    let fock_transformed = transformation.transpose() * fock * transformation;

    if fock_transformed.iter().any(|value| !value.is_finite()) {
        return Err(EngineError::Numeric {
            context: "non-finite element in the transformed Fock matrix".to_string(),
        });
    }

    let size = fock_transformed.nrows();
    let eigen = SymmetricEigen::new(fock_transformed);
    let order = sorted_indices(eigen.eigenvalues.as_slice());

    let mut coefficients_transformed = DMatrix::zeros(size, size);
    let mut orbital_energies = Vec::with_capacity(size);

    for (column, &source) in order.iter().enumerate() {
        orbital_energies.push(eigen.eigenvalues[source]);
        for row in 0..size {
            coefficients_transformed[(row, column)] = eigen.eigenvectors[(row, source)];
        }
    }

    Ok((transformation * coefficients_transformed, orbital_energies))
}
