//! STO-3G basis set parameters and construction
//!
//! Each Slater orbital is expanded in three Gaussians. The tabulated
//! exponents are for ζ = 1 and scale as ζ²; the ζ values are per
//! element and per shell (valence shells share ζ₂).
//!
//! The engine itself is basis-agnostic: any Vec<BasisFunction> works.
//! This module only supplies the bundled minimal basis.

use crate::basis::contracted::BasisFunction;
use crate::basis::primitive::GaussianPrimitive;
use crate::error::EngineError;
use crate::system::atom::Atom;

/// Contraction constants of one STO-3G shell at ζ = 1
struct ShellConstants {
    coefficients: [f64; 3],
    exponents: [f64; 3],
}

const S1_SHELL: ShellConstants = ShellConstants {
    coefficients: [0.4446345422, 0.5353281423, 0.1543289673],
    exponents: [0.109818, 0.405771, 2.22766],
};

const S2_SHELL: ShellConstants = ShellConstants {
    coefficients: [0.7001154689, 0.3995128261, -0.09996722919],
    exponents: [0.0751386, 0.231031, 0.994203],
};

const P2_SHELL: ShellConstants = ShellConstants {
    coefficients: [0.3919573931, 0.6076837186, 0.1559162750],
    exponents: [0.0751386, 0.231031, 0.994203],
};

/// Slater exponent of the innermost shell
fn zeta1(atomic_number: usize) -> Option<f64> {
    match atomic_number {
        1 => Some(1.24),
        2 => Some(2.0925),
        3 => Some(2.69),
        4 => Some(3.68),
        5 => Some(4.68),
        6 => Some(5.67),
        7 => Some(6.67),
        8 => Some(7.66),
        9 => Some(8.65),
        _ => None,
    }
}

/// Slater exponent shared by the 2s and 2p shells
fn zeta2(atomic_number: usize) -> Option<f64> {
    match atomic_number {
        3 => Some(0.75),
        4 => Some(1.10),
        5 => Some(1.45),
        6 => Some(1.72),
        7 => Some(1.95),
        8 => Some(2.25),
        9 => Some(2.55),
        _ => None,
    }
}

fn contraction(shell: &ShellConstants, zeta: f64) -> Vec<GaussianPrimitive> {
    shell
        .coefficients
        .iter()
        .zip(shell.exponents.iter())
        .map(|(&coefficient, &exponent)| {
            GaussianPrimitive::new(coefficient, exponent * zeta * zeta)
        })
        .collect()
}

fn missing_zeta(atom: &Atom) -> EngineError {
    EngineError::Config {
        context: format!("no STO-3G parameters for element '{}'", atom.symbol),
    }
}

/// Build the STO-3G basis for a list of atoms, in atom order.
///
/// H and He carry a single 1s function; Li through F carry 1s, 2s and
/// the three Cartesian 2p functions.
pub fn build_sto3g_basis(atoms: &[Atom]) -> Result<Vec<BasisFunction>, EngineError> {
    let mut basis: Vec<BasisFunction> = Vec::new();

    for (atom_index, atom) in atoms.iter().enumerate() {
        let z1 = zeta1(atom.atomic_number).ok_or_else(|| missing_zeta(atom))?;

        basis.push(BasisFunction::new(
            atom_index,
            atom.position,
            [0, 0, 0],
            contraction(&S1_SHELL, z1),
        ));

        if atom.atomic_number <= 2 {
            continue;
        }

        let z2 = zeta2(atom.atomic_number).ok_or_else(|| missing_zeta(atom))?;

        basis.push(BasisFunction::new(
            atom_index,
            atom.position,
            [0, 0, 0],
            contraction(&S2_SHELL, z2),
        ));

        for angular_momentum in [[1, 0, 0], [0, 1, 0], [0, 0, 1]] {
            basis.push(BasisFunction::new(
                atom_index,
                atom.position,
                angular_momentum,
                contraction(&P2_SHELL, z2),
            ));
        }
    }

    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_equal;

    fn hydrogen_at(position: [f64; 3]) -> Atom {
        Atom::new("H".to_string(), 1, position)
    }

    #[test]
    fn hydrogen_gets_one_s_function() {
        let atoms = [hydrogen_at([0.0; 3])];
        let basis = build_sto3g_basis(&atoms).unwrap();

        assert_eq!(basis.len(), 1);
        assert_eq!(basis[0].angular_momentum, [0, 0, 0]);
        assert_eq!(basis[0].primitives.len(), 3);

        // ζ = 1.24 scaled exponents, largest first in the raw table order
        let zeta_sq = 1.24 * 1.24;
        assert_approx_equal!(basis[0].primitives[2].exponent, 2.22766 * zeta_sq, 1e-9);
        assert_approx_equal!(basis[0].primitives[2].coefficient, 0.1543289673, 1e-12);
        assert_approx_equal!(basis[0].primitives[0].exponent, 0.109818 * zeta_sq, 1e-9);
    }

    #[test]
    fn oxygen_gets_five_functions() {
        let atoms = [Atom::new("O".to_string(), 8, [0.0; 3])];
        let basis = build_sto3g_basis(&atoms).unwrap();

        assert_eq!(basis.len(), 5);
        assert_eq!(basis[0].angular_momentum, [0, 0, 0]);
        assert_eq!(basis[1].angular_momentum, [0, 0, 0]);
        assert_eq!(basis[2].angular_momentum, [1, 0, 0]);
        assert_eq!(basis[3].angular_momentum, [0, 1, 0]);
        assert_eq!(basis[4].angular_momentum, [0, 0, 1]);

        // the 2s and 2p shells share ζ₂
        assert_approx_equal!(
            basis[1].primitives[0].exponent,
            basis[2].primitives[0].exponent,
            1e-12
        );
    }

    #[test]
    fn water_basis_size_and_ownership() {
        let atoms = [
            Atom::new("O".to_string(), 8, [0.0, 0.0, 0.2]),
            hydrogen_at([0.0, 1.4, -0.8]),
            hydrogen_at([0.0, -1.4, -0.8]),
        ];
        let basis = build_sto3g_basis(&atoms).unwrap();

        assert_eq!(basis.len(), 7);
        assert_eq!(basis[5].atom_index, 1);
        assert_eq!(basis[6].atom_index, 2);
        for function in &basis {
            function.validate().unwrap();
        }
    }

    #[test]
    fn unsupported_element_is_a_config_error() {
        let atoms = [Atom::new("Ne".to_string(), 10, [0.0; 3])];
        assert!(matches!(
            build_sto3g_basis(&atoms),
            Err(EngineError::Config { .. })
        ));
    }
}
