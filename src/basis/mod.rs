pub mod contracted;
pub mod primitive;
pub mod sto3g;
