pub mod system;
pub mod basis;
pub mod math;
pub mod integrals;
pub mod scf;
pub mod input;
pub mod error;
pub mod macros;
