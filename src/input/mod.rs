//! Input record (YAML)
//!
//! The engine core never touches the file format: this module parses
//! the key-value record into plain values and hands the core atoms and
//! scalars. Positions are rows of [element tag, x, y, z] in Bohr.

use serde::Deserialize;

use crate::error::EngineError;
use crate::scf::guess::InitialGuess;
use crate::scf::scf_cycle::ScfOptions;
use crate::system::atom::Atom;
use crate::system::periodic_table::atomic_number;

fn default_max_iterations() -> usize {
    100
}

fn default_density_tolerance() -> f64 {
    1.0e-8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    /// Rows of [element tag, x, y, z], positions in Bohr
    pub positions: Vec<(String, f64, f64, f64)>,

    pub n_electrons: usize,

    #[serde(default = "default_max_iterations")]
    pub max_hartree_fock_iterations: usize,

    #[serde(default = "default_density_tolerance")]
    pub tol_change_density_matrix: f64,

    #[serde(default)]
    pub initial_fock_guess: InitialGuess,

    #[serde(default)]
    pub verbose: bool,
}

impl Input {
    pub fn from_yaml(text: &str) -> Result<Self, EngineError> {
        serde_yaml::from_str(text).map_err(|err| EngineError::Config {
            context: format!("failed to parse input file: {err}"),
        })
    }

    /// Resolve the position rows into atoms
    pub fn atoms(&self) -> Result<Vec<Atom>, EngineError> {
        if self.positions.is_empty() {
            return Err(EngineError::Config {
                context: "found no atom names and positions to parse".to_string(),
            });
        }

        self.positions
            .iter()
            .map(|(symbol, x, y, z)| {
                let number = atomic_number(symbol).ok_or_else(|| EngineError::Config {
                    context: format!("unknown element symbol '{symbol}'"),
                })?;

                Ok(Atom::new(symbol.clone(), number, [*x, *y, *z]))
            })
            .collect()
    }

    pub fn scf_options(&self) -> ScfOptions {
        ScfOptions {
            initial_guess: self.initial_fock_guess,
            n_electrons: self.n_electrons,
            max_iterations: self.max_hartree_fock_iterations,
            density_tolerance: self.tol_change_density_matrix,
            allow_unconverged: false,
        }
    }
}
