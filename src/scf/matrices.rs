//! Matrix assembly over the contracted basis
//!
//! Every one-electron matrix is real symmetric: only the upper triangle
//! (including the diagonal) is computed, then mirrored. The overlap
//! diagonal is pinned to exactly 1.0 for normalised basis functions
//! rather than recomputed.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::basis::contracted::BasisFunction;
use crate::error::EngineError;
use crate::integrals::contracted::{
    electron_repulsion_contracted, kinetic_contracted, nuclear_attraction_contracted,
    overlap_contracted,
};
use crate::integrals::store::TwoElectronStore;
use crate::scf::roothaan::sorted_indices;
use crate::system::atom::Atom;

/// Overlap matrix S
pub fn overlap_matrix(basis: &[BasisFunction]) -> Result<DMatrix<f64>, EngineError> {
    let size = basis.len();
    let mut output = DMatrix::zeros(size, size);

    for i in 0..size {
        output[(i, i)] = 1.0;
    }

    for i0 in 0..size {
        for i1 in (i0 + 1)..size {
            let element = overlap_contracted(&basis[i0], &basis[i1])?;
            output[(i0, i1)] = element;
            output[(i1, i0)] = element;
        }
    }

    Ok(output)
}

/// Kinetic energy matrix T
pub fn kinetic_matrix(basis: &[BasisFunction]) -> Result<DMatrix<f64>, EngineError> {
    let size = basis.len();
    let mut output = DMatrix::zeros(size, size);

    for i0 in 0..size {
        for i1 in i0..size {
            let element = kinetic_contracted(&basis[i0], &basis[i1])?;
            output[(i0, i1)] = element;
            output[(i1, i0)] = element;
        }
    }

    Ok(output)
}

/// Attraction matrix V for a single nucleus
pub fn nuclear_attraction_matrix(
    basis: &[BasisFunction],
    atom: &Atom,
) -> Result<DMatrix<f64>, EngineError> {
    let size = basis.len();
    let mut output = DMatrix::zeros(size, size);

    for i0 in 0..size {
        for i1 in i0..size {
            let element = nuclear_attraction_contracted(&basis[i0], &basis[i1], atom)?;
            output[(i0, i1)] = element;
            output[(i1, i0)] = element;
        }
    }

    Ok(output)
}

/// H_core = T + Σ_nuclei V
pub fn core_hamiltonian_matrix(
    basis: &[BasisFunction],
    atoms: &[Atom],
) -> Result<DMatrix<f64>, EngineError> {
    let mut output = kinetic_matrix(basis)?;

    // Para cada núcleo
    for atom in atoms {
        output += nuclear_attraction_matrix(basis, atom)?;
    }

    Ok(output)
}

/// Symmetric orthogonalisation transform X = U Λ^(-1/2), with XᵀSX = I
///
/// Eigenpairs are placed in ascending eigenvalue order, and each column
/// is sign-canonicalised so its largest-magnitude element is
/// non-negative. Both choices make the SCF output deterministic.
pub fn transformation_matrix(overlap: &DMatrix<f64>) -> Result<DMatrix<f64>, EngineError> {
    let size = overlap.nrows();
    let eigen = SymmetricEigen::new(overlap.clone());
    let order = sorted_indices(eigen.eigenvalues.as_slice());

    let mut output = DMatrix::zeros(size, size);

    for (column, &source) in order.iter().enumerate() {
        let eigenvalue = eigen.eigenvalues[source];

        if !(eigenvalue > 0.0) {
            return Err(EngineError::Numeric {
                context: format!(
                    "overlap matrix is not positive definite (eigenvalue {eigenvalue})"
                ),
            });
        }

        let scale = 1.0 / eigenvalue.sqrt();
        for row in 0..size {
            output[(row, column)] = eigen.eigenvectors[(row, source)] * scale;
        }
    }

    for column in 0..size {
        let mut leading = 0;
        for row in 1..size {
            if output[(row, column)].abs() > output[(leading, column)].abs() {
                leading = row;
            }
        }

        if output[(leading, column)] < 0.0 {
            for row in 0..size {
                output[(row, column)] = -output[(row, column)];
            }
        }
    }

    Ok(output)
}

/// Build the full (ij|kl) table; the canonical key decides who computes
pub fn two_electron_store(basis: &[BasisFunction]) -> Result<TwoElectronStore, EngineError> {
    let size = basis.len();
    let mut store = TwoElectronStore::new();

    for i0 in 0..size {
        for i1 in 0..size {
            for i2 in 0..size {
                for i3 in 0..size {
                    if !store.exists(i0, i1, i2, i3) {
                        let integral = electron_repulsion_contracted(
                            &basis[i0], &basis[i1], &basis[i2], &basis[i3],
                        )?;
                        store.set(i0, i1, i2, i3, integral);
                    }
                }
            }
        }
    }

    Ok(store)
}

/// G(i,j) = Σ_kl P(k,l) [(ij|kl) - ½(il|kj)]
pub fn electron_repulsion_matrix(
    density: &DMatrix<f64>,
    store: &TwoElectronStore,
) -> Result<DMatrix<f64>, EngineError> {
    let size = density.nrows();
    let mut output = DMatrix::zeros(size, size);

    let lookup = |i0: usize, i1: usize, i2: usize, i3: usize| {
        store.get(i0, i1, i2, i3).ok_or_else(|| EngineError::Range {
            context: format!("missing two-electron integral ({i0} {i1}|{i2} {i3})"),
        })
    };

    for i0 in 0..size {
        for i1 in 0..size {
            let mut element = 0.0;

            for i2 in 0..size {
                for i3 in 0..size {
                    let coulombic = lookup(i0, i1, i2, i3)?;
                    let exchange = lookup(i0, i3, i2, i1)?;
                    element += density[(i2, i3)] * (coulombic - 0.5 * exchange);
                }
            }

            output[(i0, i1)] = element;
        }
    }

    Ok(output)
}

/// F = H_core + G[P]
pub fn fock_matrix(
    density: &DMatrix<f64>,
    store: &TwoElectronStore,
    core_hamiltonian: &DMatrix<f64>,
) -> Result<DMatrix<f64>, EngineError> {
    Ok(core_hamiltonian + electron_repulsion_matrix(density, store)?)
}

/// Surface NaN/Inf as a numeric error naming the offending matrix
pub fn ensure_finite(matrix: &DMatrix<f64>, name: &str) -> Result<(), EngineError> {
    if matrix.iter().any(|value| !value.is_finite()) {
        return Err(EngineError::Numeric {
            context: format!("non-finite element in the {name} matrix"),
        });
    }

    Ok(())
}
