//! Density matrix construction and comparison
//!
//! P_μν = 2 Σ_a^occ C_μa C_νa  (closed shell, doubly occupied orbitals)

use nalgebra::DMatrix;

/// Build the RHF density from the lowest n_electrons/2 orbitals
pub fn build_density(coefficients: &DMatrix<f64>, n_electrons: usize) -> DMatrix<f64> {
    let size = coefficients.nrows();
    let n_occupied = n_electrons / 2;

    let mut density = DMatrix::zeros(size, size);

    for i0 in 0..size {
        for i1 in i0..size {
            let mut element = 0.0;
            for occupied in 0..n_occupied {
                element += coefficients[(i0, occupied)] * coefficients[(i1, occupied)];
            }

            let element = 2.0 * element;
            density[(i0, i1)] = element;
            density[(i1, i0)] = element;
        }
    }

    density
}

/// Convergence measure Δ = ½ sqrt(Σ_ij (P_new - P_old)²)
pub fn density_difference(old_density: &DMatrix<f64>, new_density: &DMatrix<f64>) -> f64 {
    let mut sum = 0.0;

    for (old, new) in old_density.iter().zip(new_density.iter()) {
        let diff = new - old;
        sum += diff * diff;
    }

    0.5 * sum.sqrt()
}
