use std::env;
use std::fs;
use std::process::ExitCode;

use rhf_engine::basis::sto3g::build_sto3g_basis;
use rhf_engine::error::EngineError;
use rhf_engine::input::Input;
use rhf_engine::scf::scf_cycle::run_scf;

/// Exit codes: 0 converged, 1 parse error, 2 non-convergence, 3 numerical failure
fn exit_code_for(error: &EngineError) -> u8 {
    match error {
        EngineError::Config { .. } | EngineError::Domain { .. } => 1,
        EngineError::NonConvergence { .. } => 2,
        EngineError::Numeric { .. } | EngineError::Range { .. } => 3,
    }
}

fn main() -> ExitCode {
    // -------------------------------------------------
    // 1. Parse CLI
    // -------------------------------------------------
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage:");
        eprintln!("  rhf_engine input.yaml");
        return ExitCode::from(1);
    }

    // -------------------------------------------------
    // 2. Read input file
    // -------------------------------------------------
    let input_text = match fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Cannot read input file '{}': {err}", args[1]);
            return ExitCode::from(1);
        }
    };

    let input = match Input::from_yaml(&input_text) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    // -------------------------------------------------
    // 3. Logging
    // -------------------------------------------------
    let default_filter = if input.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // -------------------------------------------------
    // 4. Atoms and basis
    // -------------------------------------------------
    let atoms = match input.atoms() {
        Ok(atoms) => atoms,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(exit_code_for(&err));
        }
    };

    let basis = match build_sto3g_basis(&atoms) {
        Ok(basis) => basis,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(exit_code_for(&err));
        }
    };

    tracing::info!(
        "molecule loaded: {} atoms, {} basis functions",
        atoms.len(),
        basis.len()
    );

    // -------------------------------------------------
    // 5. SCF
    // -------------------------------------------------
    match run_scf(&atoms, &basis, &input.scf_options()) {
        Ok(result) => {
            println!("SCF converged in {} iterations", result.iterations);
            println!("Total energy:      {:.10} Eh", result.energy);
            println!("Electronic energy: {:.10} Eh", result.electronic_energy);
            println!("Orbital energies (Eh):");
            for (index, energy) in result.orbital_energies.iter().enumerate() {
                println!("  {index:3}  {energy:14.8}");
            }

            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
