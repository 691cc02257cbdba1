//! Weather-risk intelligence: simulated events, per-vendor risk profiles,
//! and portfolio-level insights / climate scenarios.
//!
//! The two randomized operations take an explicit `rand::Rng`; use
//! [`SimulationContext`] to get a reproducible generator.

pub mod context;
pub mod events;
pub mod insights;
pub mod risk;

pub use context::{Season, SimulationContext};
