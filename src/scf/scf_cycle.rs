//! Self-Consistent Field (SCF) cycle
//!
//! Restricted closed-shell Hartree-Fock, plain iteration (no damping,
//! no DIIS). One-time precomputations: S, H_core = T + ΣV, the
//! orthogonalisation transform X and the two-electron table. Each step
//! diagonalises XᵀFX, rebuilds the density and tests ½‖ΔP‖_F against
//! the tolerance.

use nalgebra::DMatrix;
use tracing::{debug, info, warn};

use crate::basis::contracted::BasisFunction;
use crate::error::EngineError;
use crate::scf::density::{build_density, density_difference};
use crate::scf::energy::{nuclear_repulsion_energy, total_energy};
use crate::scf::guess::{initial_fock_matrix, InitialGuess};
use crate::scf::matrices::{
    core_hamiltonian_matrix, ensure_finite, fock_matrix, overlap_matrix, transformation_matrix,
    two_electron_store,
};
use crate::scf::roothaan::solve_roothaan;
use crate::system::atom::Atom;

/// SCF options
#[derive(Clone, Debug)]
pub struct ScfOptions {
    pub initial_guess: InitialGuess,
    /// Total electron count; must be even for a closed shell
    pub n_electrons: usize,
    pub max_iterations: usize,
    /// Threshold on ½‖P_new - P_old‖_F
    pub density_tolerance: f64,
    /// Return the last iterate instead of an error when the iteration
    /// budget runs out
    pub allow_unconverged: bool,
}

/// SCF result
#[derive(Clone, Debug)]
pub struct ScfResult {
    /// Total energy in Hartree, including nuclear repulsion
    pub energy: f64,
    pub electronic_energy: f64,
    pub density: DMatrix<f64>,
    pub coefficients: DMatrix<f64>,
    /// Orbital energies, ascending
    pub orbital_energies: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

fn validate_inputs(
    atoms: &[Atom],
    basis: &[BasisFunction],
    options: &ScfOptions,
) -> Result<(), EngineError> {
    if basis.is_empty() {
        return Err(EngineError::Config {
            context: "basis set is empty".to_string(),
        });
    }

    for function in basis {
        function.validate()?;
    }

    for atom in atoms {
        if atom.position.iter().any(|x| !x.is_finite()) {
            return Err(EngineError::Domain {
                context: format!("non-finite position on atom '{}'", atom.symbol),
            });
        }
    }

    if options.n_electrons % 2 != 0 {
        return Err(EngineError::Domain {
            context: format!(
                "odd electron count {} in a closed-shell calculation",
                options.n_electrons
            ),
        });
    }

    if options.n_electrons / 2 > basis.len() {
        return Err(EngineError::Domain {
            context: format!(
                "{} electrons need {} occupied orbitals but the basis has only {} functions",
                options.n_electrons,
                options.n_electrons / 2,
                basis.len()
            ),
        });
    }

    if options.max_iterations == 0 {
        return Err(EngineError::Domain {
            context: "max_iterations must be positive".to_string(),
        });
    }

    if !(options.density_tolerance > 0.0) {
        return Err(EngineError::Domain {
            context: format!(
                "density tolerance {} must be positive",
                options.density_tolerance
            ),
        });
    }

    Ok(())
}

/// Run the restricted Hartree-Fock iteration to density self-consistency
pub fn run_scf(
    atoms: &[Atom],
    basis: &[BasisFunction],
    options: &ScfOptions,
) -> Result<ScfResult, EngineError> {
    validate_inputs(atoms, basis, options)?;

    debug!("building one-electron matrices for {} functions", basis.len());
    let overlap = overlap_matrix(basis)?;
    ensure_finite(&overlap, "overlap")?;
    debug!("overlap matrix{overlap}");

    let core_hamiltonian = core_hamiltonian_matrix(basis, atoms)?;
    ensure_finite(&core_hamiltonian, "core Hamiltonian")?;
    debug!("core Hamiltonian matrix{core_hamiltonian}");

    let transformation = transformation_matrix(&overlap)?;
    debug!("transformation matrix{transformation}");

    debug!("building the two-electron table");
    let store = two_electron_store(basis)?;
    debug!("two-electron table holds {} unique integrals", store.len());

    let nuclear_energy = nuclear_repulsion_energy(atoms);

    // iteración 0: density from the guessed Fock matrix
    let mut fock = initial_fock_matrix(options.initial_guess, &overlap, &core_hamiltonian);
    let (mut coefficients, mut orbital_energies) = solve_roothaan(&fock, &transformation)?;
    let mut density = build_density(&coefficients, options.n_electrons);
    let mut energy = total_energy(&density, &fock, &core_hamiltonian, atoms);
    info!(iteration = 0, energy, "initial guess");

    let mut delta = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        fock = fock_matrix(&density, &store, &core_hamiltonian)?;

        let (new_coefficients, new_orbital_energies) = solve_roothaan(&fock, &transformation)?;
        let new_density = build_density(&new_coefficients, options.n_electrons);

        energy = total_energy(&new_density, &fock, &core_hamiltonian, atoms);
        if !energy.is_finite() {
            return Err(EngineError::Numeric {
                context: format!("total energy became non-finite at iteration {iteration}"),
            });
        }

        delta = density_difference(&density, &new_density);
        info!(iteration, energy, delta, "scf step");

        density = new_density;
        coefficients = new_coefficients;
        orbital_energies = new_orbital_energies;

        if delta < options.density_tolerance {
            info!(iteration, energy, "converged");
            return Ok(ScfResult {
                energy,
                electronic_energy: energy - nuclear_energy,
                density,
                coefficients,
                orbital_energies,
                iterations: iteration,
                converged: true,
            });
        }
    }

    if options.allow_unconverged {
        warn!(
            iterations = options.max_iterations,
            delta, "returning unconverged result on request"
        );
        return Ok(ScfResult {
            energy,
            electronic_energy: energy - nuclear_energy,
            density,
            coefficients,
            orbital_energies,
            iterations: options.max_iterations,
            converged: false,
        });
    }

    Err(EngineError::NonConvergence {
        iterations: options.max_iterations,
        delta,
        tolerance: options.density_tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_equal;
    use crate::basis::sto3g::build_sto3g_basis;
    use crate::scf::density::build_density as rebuild_density;
    use nalgebra::SymmetricEigen;

    fn h2_atoms() -> Vec<Atom> {
        vec![
            Atom::new("H".to_string(), 1, [0.0, 0.0, 0.0]),
            Atom::new("H".to_string(), 1, [0.0, 0.0, 1.4]),
        ]
    }

    fn water_atoms() -> Vec<Atom> {
        let bohr_per_angstrom = 0.529177210544;
        let y_h = 0.751155 / bohr_per_angstrom;
        let z_h = 0.465285 / bohr_per_angstrom;
        let z_o = 0.116321 / bohr_per_angstrom;

        vec![
            Atom::new("O".to_string(), 8, [0.0, 0.0, z_o]),
            Atom::new("H".to_string(), 1, [0.0, y_h, -z_h]),
            Atom::new("H".to_string(), 1, [0.0, -y_h, -z_h]),
        ]
    }

    fn options(guess: InitialGuess, n_electrons: usize) -> ScfOptions {
        ScfOptions {
            initial_guess: guess,
            n_electrons,
            max_iterations: 100,
            density_tolerance: 1e-8,
            allow_unconverged: false,
        }
    }

    #[test]
    fn h2_ground_state_energy() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        let result = run_scf(&atoms, &basis, &options(InitialGuess::Zero, 2)).unwrap();

        assert!(result.converged);
        assert_approx_equal!(result.energy, -1.1167, 5e-4);
        assert_eq!(result.orbital_energies.len(), 2);
        assert!(result.orbital_energies[0] < result.orbital_energies[1]);
    }

    #[test]
    fn h2_density_is_symmetric_and_traces_to_two() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();
        let overlap = overlap_matrix(&basis).unwrap();

        let result = run_scf(&atoms, &basis, &options(InitialGuess::Zero, 2)).unwrap();

        assert_approx_equal!(result.density[(0, 1)], result.density[(1, 0)], 1e-12);

        // Tr(P S) counts the electrons
        let population = (&result.density * &overlap).trace();
        assert_approx_equal!(population, 2.0, 1e-6);
    }

    #[test]
    fn heh_cation_converges() {
        let atoms = vec![
            Atom::new("He".to_string(), 2, [0.0, 0.0, 0.0]),
            Atom::new("H".to_string(), 1, [0.0, 0.0, 1.4632]),
        ];
        let basis = build_sto3g_basis(&atoms).unwrap();

        let result = run_scf(&atoms, &basis, &options(InitialGuess::Zero, 2)).unwrap();

        assert!(result.converged);
        assert!(result.energy.is_finite());
        assert!(result.energy < 0.0);

        // the density operator has no negative occupations
        let eigen = SymmetricEigen::new(result.density.clone());
        for eigenvalue in eigen.eigenvalues.iter() {
            assert!(*eigenvalue > -1e-10, "negative density eigenvalue {eigenvalue}");
        }
    }

    #[test]
    fn water_matches_textbook_energy() {
        let atoms = water_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();
        assert_eq!(basis.len(), 7);

        let scf_options = ScfOptions {
            initial_guess: InitialGuess::ExtendedHuckel,
            n_electrons: 10,
            max_iterations: 30,
            density_tolerance: 1e-6,
            allow_unconverged: false,
        };

        let result = run_scf(&atoms, &basis, &scf_options).unwrap();

        assert!(result.converged);
        assert!(result.iterations <= 30);
        assert_approx_equal!(result.energy, -74.942080, 1e-4);
    }

    #[test]
    fn all_guesses_reach_the_same_h2_energy() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        let guesses = [
            InitialGuess::Zero,
            InitialGuess::CoreHamiltonian,
            InitialGuess::ExtendedHuckel,
        ];

        let energies: Vec<f64> = guesses
            .iter()
            .map(|&guess| run_scf(&atoms, &basis, &options(guess, 2)).unwrap().energy)
            .collect();

        assert_approx_equal!(energies[0], energies[1], 1e-8);
        assert_approx_equal!(energies[0], energies[2], 1e-8);
    }

    /// re-running from the converged density changes nothing
    #[test]
    fn converged_density_is_a_fixed_point() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        let mut tight = options(InitialGuess::Zero, 2);
        tight.density_tolerance = 1e-10;

        let result = run_scf(&atoms, &basis, &tight).unwrap();

        let overlap = overlap_matrix(&basis).unwrap();
        let core = core_hamiltonian_matrix(&basis, &atoms).unwrap();
        let transformation = transformation_matrix(&overlap).unwrap();
        let store = two_electron_store(&basis).unwrap();

        let fock = fock_matrix(&result.density, &store, &core).unwrap();
        let (coefficients, _) = solve_roothaan(&fock, &transformation).unwrap();
        let replayed_density = rebuild_density(&coefficients, 2);

        let delta = density_difference(&result.density, &replayed_density);
        assert!(delta < 1e-10, "fixed point drifted by {delta}");

        let replayed_energy = total_energy(&replayed_density, &fock, &core, &atoms);
        assert_approx_equal!(replayed_energy, result.energy, 1e-10);
    }

    #[test]
    fn odd_electron_count_is_a_domain_error() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        assert!(matches!(
            run_scf(&atoms, &basis, &options(InitialGuess::Zero, 3)),
            Err(EngineError::Domain { .. })
        ));
    }

    #[test]
    fn too_many_electrons_is_a_domain_error() {
        let atoms = h2_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        assert!(matches!(
            run_scf(&atoms, &basis, &options(InitialGuess::Zero, 6)),
            Err(EngineError::Domain { .. })
        ));
    }

    #[test]
    fn exhausted_iterations_report_non_convergence() {
        let atoms = water_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        let scf_options = ScfOptions {
            initial_guess: InitialGuess::Zero,
            n_electrons: 10,
            max_iterations: 1,
            density_tolerance: 1e-8,
            allow_unconverged: false,
        };

        assert!(matches!(
            run_scf(&atoms, &basis, &scf_options),
            Err(EngineError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn unconverged_result_on_request() {
        let atoms = water_atoms();
        let basis = build_sto3g_basis(&atoms).unwrap();

        let scf_options = ScfOptions {
            initial_guess: InitialGuess::Zero,
            n_electrons: 10,
            max_iterations: 1,
            density_tolerance: 1e-8,
            allow_unconverged: true,
        };

        let result = run_scf(&atoms, &basis, &scf_options).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert!(result.energy.is_finite());
    }
}
