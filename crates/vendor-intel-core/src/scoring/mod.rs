pub mod exposure;
pub mod opportunity;
pub mod readiness;
