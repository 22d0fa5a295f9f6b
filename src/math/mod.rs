pub mod binomial;
pub mod factorial;
pub mod gaussian;
