pub mod classifier;
pub mod comparison;
