//! SCF energies
//!
//! E_elec = ½ Σ_ij P(i,j) (F(i,j) + H_core(i,j))
//! E_NN   = Σ_{A<B} Z_A Z_B / |R_A - R_B|

use nalgebra::DMatrix;

use crate::math::gaussian::dist_squared;
use crate::system::atom::Atom;

/// Electronic energy for the current density and Fock matrix
pub fn electronic_energy(
    density: &DMatrix<f64>,
    fock: &DMatrix<f64>,
    core_hamiltonian: &DMatrix<f64>,
) -> f64 {
    let size = density.nrows();
    let mut energy = 0.0;

    for i0 in 0..size {
        for i1 in 0..size {
            energy += density[(i0, i1)] * (fock[(i0, i1)] + core_hamiltonian[(i0, i1)]);
        }
    }

    0.5 * energy
}

/// Nuclear-nuclear repulsion over all atom pairs
pub fn nuclear_repulsion_energy(atoms: &[Atom]) -> f64 {
    let mut energy = 0.0;

    for (index0, atom0) in atoms.iter().enumerate() {
        for atom1 in atoms.iter().skip(index0 + 1) {
            let distance = dist_squared(atom0.position, atom1.position).sqrt();
            energy += atom0.nuclear_charge() * atom1.nuclear_charge() / distance;
        }
    }

    energy
}

/// E_tot = E_elec + E_NN
pub fn total_energy(
    density: &DMatrix<f64>,
    fock: &DMatrix<f64>,
    core_hamiltonian: &DMatrix<f64>,
    atoms: &[Atom],
) -> f64 {
    electronic_energy(density, fock, core_hamiltonian) + nuclear_repulsion_energy(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_equal;

    #[test]
    fn h2_nuclear_repulsion() {
        let atoms = vec![
            Atom::new("H".to_string(), 1, [0.0, 0.0, 0.0]),
            Atom::new("H".to_string(), 1, [0.0, 0.0, 1.4]),
        ];

        assert_approx_equal!(nuclear_repulsion_energy(&atoms), 1.0 / 1.4, 1e-12);
    }

    #[test]
    fn water_nuclear_repulsion_sums_three_pairs() {
        let atoms = vec![
            Atom::new("O".to_string(), 8, [0.0, 0.0, 0.0]),
            Atom::new("H".to_string(), 1, [0.0, 0.0, 2.0]),
            Atom::new("H".to_string(), 1, [0.0, 2.0, 0.0]),
        ];

        let h_h = 1.0 / (8.0_f64).sqrt();
        let expected = 8.0 / 2.0 + 8.0 / 2.0 + h_h;
        assert_approx_equal!(nuclear_repulsion_energy(&atoms), expected, 1e-12);
    }

    #[test]
    fn single_atom_has_no_repulsion() {
        let atoms = vec![Atom::new("He".to_string(), 2, [0.0; 3])];
        assert_eq!(nuclear_repulsion_energy(&atoms), 0.0);
    }

    #[test]
    fn electronic_energy_hand_value() {
        let density = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 0.0]);
        let fock = DMatrix::from_row_slice(2, 2, &[-0.5, 0.1, 0.1, 0.3]);
        let core = DMatrix::from_row_slice(2, 2, &[-1.0, 0.2, 0.2, 0.4]);

        // ½ · P(0,0) · (F(0,0) + H(0,0)) = ½ · 2 · (-1.5)
        assert_approx_equal!(electronic_energy(&density, &fock, &core), -1.5, 1e-12);
    }
}
