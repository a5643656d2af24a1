//! Emerald Village - an educational village reward simulation

pub mod core;
pub mod inhabitant;
pub mod village;
