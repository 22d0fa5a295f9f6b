//! Initial Fock matrix guesses
//!
//! Three value-level variants; the extended Hückel form scales the
//! overlap by the average of the core Hamiltonian diagonal entries,
//! with the conventional constant K = 1.75 applied to every entry.

use nalgebra::DMatrix;
use serde::Deserialize;

pub const EXTENDED_HUCKEL_CONSTANT: f64 = 1.75;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialGuess {
    #[default]
    Zero,
    CoreHamiltonian,
    ExtendedHuckel,
}

/// F₀ for the chosen guess
pub fn initial_fock_matrix(
    guess: InitialGuess,
    overlap: &DMatrix<f64>,
    core_hamiltonian: &DMatrix<f64>,
) -> DMatrix<f64> {
    let size = overlap.nrows();

    match guess {
        InitialGuess::Zero => DMatrix::zeros(size, size),
        InitialGuess::CoreHamiltonian => core_hamiltonian.clone(),
        InitialGuess::ExtendedHuckel => {
            let mut output = DMatrix::zeros(size, size);

            for i0 in 0..size {
                for i1 in 0..size {
                    let core_average =
                        0.5 * (core_hamiltonian[(i0, i0)] + core_hamiltonian[(i1, i1)]);
                    output[(i0, i1)] =
                        EXTENDED_HUCKEL_CONSTANT * overlap[(i0, i1)] * core_average;
                }
            }

            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_equal;

    fn sample_matrices() -> (DMatrix<f64>, DMatrix<f64>) {
        let overlap = DMatrix::from_row_slice(2, 2, &[1.0, 0.66, 0.66, 1.0]);
        let core = DMatrix::from_row_slice(2, 2, &[-1.12, -0.96, -0.96, -1.12]);
        (overlap, core)
    }

    #[test]
    fn zero_guess() {
        let (overlap, core) = sample_matrices();
        assert_eq!(
            initial_fock_matrix(InitialGuess::Zero, &overlap, &core),
            DMatrix::zeros(2, 2)
        );
    }

    #[test]
    fn core_hamiltonian_guess() {
        let (overlap, core) = sample_matrices();
        assert_eq!(
            initial_fock_matrix(InitialGuess::CoreHamiltonian, &overlap, &core),
            core
        );
    }

    #[test]
    fn extended_huckel_guess_entries() {
        let (overlap, core) = sample_matrices();
        let fock = initial_fock_matrix(InitialGuess::ExtendedHuckel, &overlap, &core);

        // diagonal: K * 1.0 * H(i,i)
        assert_approx_equal!(fock[(0, 0)], 1.75 * -1.12, 1e-12);
        // off-diagonal: K * S(0,1) * ½(H(0,0) + H(1,1))
        assert_approx_equal!(fock[(0, 1)], 1.75 * 0.66 * -1.12, 1e-12);
        assert_approx_equal!(fock[(0, 1)], fock[(1, 0)], 1e-14);
    }

    #[test]
    fn guess_names_deserialize() {
        assert_eq!(
            serde_yaml::from_str::<InitialGuess>("zero").unwrap(),
            InitialGuess::Zero
        );
        assert_eq!(
            serde_yaml::from_str::<InitialGuess>("core_hamiltonian").unwrap(),
            InitialGuess::CoreHamiltonian
        );
        assert_eq!(
            serde_yaml::from_str::<InitialGuess>("extended_huckel").unwrap(),
            InitialGuess::ExtendedHuckel
        );
        assert!(serde_yaml::from_str::<InitialGuess>("hueckel").is_err());
    }
}
